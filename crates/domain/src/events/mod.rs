//! Gameplay events
//!
//! State changes reported by the host game that can complete a challenge
//! without waiting for a room transition.

use serde::{Deserialize, Serialize};

use crate::entities::WinConditionKind;
use crate::types::RoomKind;
use crate::{CardId, RelicId};

/// A state mutation or room entry observed in the host game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    CardRemoved { card: CardId },
    GoldChanged { gold: i32 },
    MaxHpChanged { max_hp: i32 },
    RelicCounterChanged { relic: RelicId, counter: i32 },
    RoomEntered { room: RoomKind },
}

impl GameEvent {
    /// The win-condition variant this event can newly satisfy, for events
    /// handled by a variant-filtered check. `None` for room entry and for
    /// relic counters other than the Circlet's.
    pub fn affected_kind(&self) -> Option<WinConditionKind> {
        match self {
            GameEvent::CardRemoved { .. } => Some(WinConditionKind::RemoveAllCards),
            GameEvent::GoldChanged { .. } => Some(WinConditionKind::GoldThreshold),
            GameEvent::MaxHpChanged { .. } => Some(WinConditionKind::MaxHp),
            GameEvent::RelicCounterChanged { relic, .. }
                if relic.as_str() == crate::entities::CIRCLET_RELIC_ID =>
            {
                Some(WinConditionKind::CircletCount)
            }
            GameEvent::RelicCounterChanged { .. } | GameEvent::RoomEntered { .. } => None,
        }
    }
}
