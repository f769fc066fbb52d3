//! Challenge registry - lookup of challenge definitions by id
//!
//! Lifecycle: one writer populates the registry during startup (through
//! `register` or `from_definitions`), then it is moved behind an `Arc` and
//! only read. There is no removal or replacement after that point.
//!
//! A lookup miss is normal: it means no challenge with that id is configured.

use std::collections::HashMap;

use crate::entities::ChallengeDefinition;
use crate::error::DomainError;
use crate::ChallengeId;

/// Challenge definitions keyed by id, remembering registration order.
#[derive(Debug, Clone, Default)]
pub struct ChallengeRegistry {
    challenges: HashMap<ChallengeId, ChallengeDefinition>,
    order: Vec<ChallengeId>,
}

impl ChallengeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from definitions, failing on the first duplicate id.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ChallengeDefinition>,
    ) -> Result<Self, DomainError> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Register a challenge definition.
    ///
    /// Definitions are immutable once registered, so a second definition with
    /// the same id is rejected rather than replacing the first.
    pub fn register(&mut self, definition: ChallengeDefinition) -> Result<(), DomainError> {
        if self.challenges.contains_key(definition.id()) {
            return Err(DomainError::duplicate_challenge(definition.id().clone()));
        }
        self.order.push(definition.id().clone());
        self.challenges.insert(definition.id().clone(), definition);
        Ok(())
    }

    /// Look up a challenge by id.
    pub fn get(&self, id: &str) -> Option<&ChallengeDefinition> {
        self.challenges.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.challenges.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> &[ChallengeId] {
        &self.order
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ChallengeDefinition> {
        self.order.iter().filter_map(|id| self.challenges.get(id))
    }
}
