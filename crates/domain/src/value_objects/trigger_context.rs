//! Trigger context - which special rooms are active for a general check

use serde::{Deserialize, Serialize};

use crate::entities::WinCondition;
use crate::types::RoomKind;

/// Room semantics active during a general victory check.
///
/// The three flags are independent; a condition is considered when any
/// active room is one it applies at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerContext {
    pub in_boss_treasure_room: bool,
    pub in_victory_room: bool,
    pub in_true_victory_room: bool,
}

impl TriggerContext {
    pub fn new(
        in_boss_treasure_room: bool,
        in_victory_room: bool,
        in_true_victory_room: bool,
    ) -> Self {
        Self {
            in_boss_treasure_room,
            in_victory_room,
            in_true_victory_room,
        }
    }

    /// No room active; admits nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn for_room(room: RoomKind) -> Self {
        match room {
            RoomKind::BossTreasure => Self::new(true, false, false),
            RoomKind::Victory => Self::new(false, true, false),
            RoomKind::TrueVictory => Self::new(false, false, true),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.in_boss_treasure_room || self.in_victory_room || self.in_true_victory_room)
    }

    /// Whether `condition` should be evaluated under this context.
    pub fn admits(&self, condition: &WinCondition) -> bool {
        (self.in_boss_treasure_room && condition.applies_at_boss_treasure_room())
            || (self.in_victory_room && condition.applies_at_victory_room())
            || (self.in_true_victory_room && condition.applies_at_true_victory_room())
    }
}
