//! Room and screen vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Special rooms at which room-triggered win conditions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    /// Treasure room that follows an act boss.
    BossTreasure,
    /// Victory room reached after the final act boss.
    Victory,
    /// Victory room reached after the Heart.
    TrueVictory,
}

impl RoomKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::BossTreasure => "boss_treasure",
            RoomKind::Victory => "victory",
            RoomKind::TrueVictory => "true_victory",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "boss_treasure" => Ok(RoomKind::BossTreasure),
            "victory" => Ok(RoomKind::Victory),
            "true_victory" => Ok(RoomKind::TrueVictory),
            _ => Err(DomainError::parse(format!(
                "Unknown room kind: '{}'. Valid values: boss_treasure, victory, true_victory",
                s
            ))),
        }
    }
}

/// Phase of the room the player currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomPhase {
    Combat,
    Event,
    #[default]
    Incomplete,
    /// Nothing left to do in the room; set when a challenge is won.
    Complete,
}

/// Screen the host game is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenMode {
    #[default]
    None,
    Map,
    Combat,
    Victory,
    Death,
}
