//! Domain entities - Challenges and the win conditions that complete them

mod challenge;
mod win_condition;

pub use challenge::ChallengeDefinition;
pub use win_condition::{circlet_count, WinCondition, WinConditionKind, CIRCLET_RELIC_ID};
