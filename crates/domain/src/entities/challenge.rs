//! Challenge definition - one challenge's complete victory logic
//!
//! A challenge is identified by a string id and owns an ordered list of win
//! conditions. Order matters: when several conditions are satisfied at once,
//! the first one in definition order wins. Definitions are immutable once
//! registered, and an empty condition list is legal (it simply never wins).

use serde::{Deserialize, Serialize};

use super::win_condition::WinCondition;
use crate::ChallengeId;

/// A named victory objective bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDefinition {
    id: ChallengeId,
    name: String,
    #[serde(default)]
    description: String,
    /// Evaluated in order; first satisfied condition wins
    #[serde(default)]
    win_conditions: Vec<WinCondition>,
}

impl ChallengeDefinition {
    pub fn new(id: impl Into<ChallengeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            win_conditions: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The challenge's win conditions in evaluation order.
    pub fn win_condition_logic(&self) -> &[WinCondition] {
        &self.win_conditions
    }

    // === Builder Methods ===

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a win condition after the existing ones.
    pub fn with_win_condition(mut self, condition: WinCondition) -> Self {
        self.win_conditions.push(condition);
        self
    }

    pub fn with_win_conditions(mut self, conditions: impl IntoIterator<Item = WinCondition>) -> Self {
        self.win_conditions.extend(conditions);
        self
    }
}
