//! Win conditions - the predicates that complete a challenge
//!
//! Each variant carries its own configuration (thresholds, card lists) and
//! declares, per variant, which special rooms it is checked in. Evaluation
//! reads the live run through [`RunState`] and never mutates anything.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::run_state::RunState;
use crate::types::RoomKind;
use crate::{CardId, RelicId};

/// Relic whose counter drives [`WinCondition::CircletCount`].
pub const CIRCLET_RELIC_ID: &str = "Circlet";

/// Discriminant of a [`WinCondition`], used by the variant-filtered checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinConditionKind {
    RemoveAllCards,
    MaxHp,
    GoldThreshold,
    CircletCount,
    DefeatActBoss,
    DefeatFinalBoss,
    DefeatHeart,
}

impl WinConditionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WinConditionKind::RemoveAllCards => "remove_all_cards",
            WinConditionKind::MaxHp => "max_hp",
            WinConditionKind::GoldThreshold => "gold_threshold",
            WinConditionKind::CircletCount => "circlet_count",
            WinConditionKind::DefeatActBoss => "defeat_act_boss",
            WinConditionKind::DefeatFinalBoss => "defeat_final_boss",
            WinConditionKind::DefeatHeart => "defeat_heart",
        }
    }
}

impl fmt::Display for WinConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single objective that completes a challenge when satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WinCondition {
    /// The master deck contains none of the listed cards.
    RemoveAllCards { cards: Vec<CardId> },

    /// Max HP has reached the threshold.
    MaxHp { threshold: i32 },

    /// Gold has reached the threshold.
    GoldThreshold { threshold: i32 },

    /// The Circlet relic's counter has reached the required count.
    /// Not owning the relic counts as zero.
    CircletCount { required_count: i32 },

    /// The boss of the given act (or a later one) has been defeated.
    /// Only meaningful in the boss treasure room.
    DefeatActBoss { act: u32 },

    /// The final act boss has been defeated (the victory room was reached).
    DefeatFinalBoss,

    /// The Heart has been defeated (the true victory room was reached).
    DefeatHeart,
}

impl WinCondition {
    // === Constructors ===

    pub fn remove_all_cards(cards: impl IntoIterator<Item = impl Into<CardId>>) -> Self {
        Self::RemoveAllCards {
            cards: cards.into_iter().map(Into::into).collect(),
        }
    }

    /// Satisfied once the single named card has left the deck.
    pub fn remove_card(card: impl Into<CardId>) -> Self {
        Self::RemoveAllCards {
            cards: vec![card.into()],
        }
    }

    pub fn max_hp(threshold: i32) -> Self {
        Self::MaxHp { threshold }
    }

    pub fn gold_threshold(threshold: i32) -> Self {
        Self::GoldThreshold { threshold }
    }

    pub fn circlet_count(required_count: i32) -> Self {
        Self::CircletCount { required_count }
    }

    pub fn defeat_act_boss(act: u32) -> Self {
        Self::DefeatActBoss { act }
    }

    // === Capabilities ===

    pub fn kind(&self) -> WinConditionKind {
        match self {
            WinCondition::RemoveAllCards { .. } => WinConditionKind::RemoveAllCards,
            WinCondition::MaxHp { .. } => WinConditionKind::MaxHp,
            WinCondition::GoldThreshold { .. } => WinConditionKind::GoldThreshold,
            WinCondition::CircletCount { .. } => WinConditionKind::CircletCount,
            WinCondition::DefeatActBoss { .. } => WinConditionKind::DefeatActBoss,
            WinCondition::DefeatFinalBoss => WinConditionKind::DefeatFinalBoss,
            WinCondition::DefeatHeart => WinConditionKind::DefeatHeart,
        }
    }

    /// Whether this condition is considered when the player is in `room`.
    ///
    /// Fixed per variant. Deck and threshold objectives are re-checked at every
    /// act's boss chest and at the victory room, in addition to their event hooks.
    pub fn applies_at(&self, room: RoomKind) -> bool {
        use RoomKind::*;
        match self {
            WinCondition::RemoveAllCards { .. }
            | WinCondition::MaxHp { .. }
            | WinCondition::GoldThreshold { .. }
            | WinCondition::CircletCount { .. } => matches!(room, BossTreasure | Victory),
            WinCondition::DefeatActBoss { .. } => room == BossTreasure,
            WinCondition::DefeatFinalBoss => room == Victory,
            WinCondition::DefeatHeart => room == TrueVictory,
        }
    }

    pub fn applies_at_boss_treasure_room(&self) -> bool {
        self.applies_at(RoomKind::BossTreasure)
    }

    pub fn applies_at_victory_room(&self) -> bool {
        self.applies_at(RoomKind::Victory)
    }

    pub fn applies_at_true_victory_room(&self) -> bool {
        self.applies_at(RoomKind::TrueVictory)
    }

    /// Whether the objective is met by the run as it is right now.
    pub fn is_satisfied(&self, state: &dyn RunState) -> bool {
        match self {
            WinCondition::RemoveAllCards { cards } => {
                let deck = state.master_deck();
                !deck.iter().any(|card| cards.contains(card))
            }
            WinCondition::MaxHp { threshold } => state.max_hp() >= *threshold,
            WinCondition::GoldThreshold { threshold } => state.gold() >= *threshold,
            WinCondition::CircletCount { required_count } => {
                circlet_count(state) >= *required_count
            }
            WinCondition::DefeatActBoss { act } => state.act_num() >= *act,
            WinCondition::DefeatFinalBoss | WinCondition::DefeatHeart => true,
        }
    }

    /// Reject configuration that is malformed or can never be met.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            WinCondition::RemoveAllCards { cards } if cards.is_empty() => Err(
                DomainError::validation("remove_all_cards needs at least one card"),
            ),
            WinCondition::MaxHp { threshold } if *threshold <= 0 => Err(DomainError::validation(
                format!("max_hp threshold must be positive, got {}", threshold),
            )),
            WinCondition::GoldThreshold { threshold } if *threshold <= 0 => {
                Err(DomainError::validation(format!(
                    "gold_threshold must be positive, got {}",
                    threshold
                )))
            }
            WinCondition::CircletCount { required_count } if *required_count <= 0 => {
                Err(DomainError::validation(format!(
                    "circlet_count required_count must be positive, got {}",
                    required_count
                )))
            }
            WinCondition::DefeatActBoss { act: 0 } => {
                Err(DomainError::validation("defeat_act_boss act starts at 1"))
            }
            _ => Ok(()),
        }
    }
}

/// Current Circlet counter, with a missing relic read as zero.
pub fn circlet_count(state: &dyn RunState) -> i32 {
    state
        .relic_counter(&RelicId::new(CIRCLET_RELIC_ID))
        .unwrap_or(0)
}
