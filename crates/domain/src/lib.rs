//! Curated Challenges domain.
//!
//! Challenge definitions, the win conditions that complete them, and the
//! registry they are looked up from. Everything here is pure: the live run
//! is read through [`RunState`] and nothing performs I/O.

pub mod types;

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod registry;
pub mod run_state;
pub mod value_objects;

pub use entities::{
    circlet_count, ChallengeDefinition, WinCondition, WinConditionKind, CIRCLET_RELIC_ID,
};

pub use error::DomainError;
pub use events::GameEvent;

pub use ids::{AchievementId, CardId, ChallengeId, RelicId, ASCENSION_ACHIEVEMENT_SUFFIX};

pub use registry::ChallengeRegistry;

pub use run_state::{deck_contains, RunState};

#[cfg(any(test, feature = "testing"))]
pub use run_state::MockRunState;

pub use types::{RoomKind, RoomPhase, ScreenMode};

pub use value_objects::TriggerContext;
