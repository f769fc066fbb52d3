//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Achievement unlocks (Steam, local profile, ...)
//! - Dungeon and presentation side effects owned by the host game
//! - Localized UI text
//! - Clock (for testing)
//!
//! Read-only run queries use `curated_domain::RunState`, re-exported here.

mod external;
mod testing;

// =============================================================================
// Host Game Ports
// =============================================================================
pub use external::{AchievementPort, DungeonPort, LocalizationPort, PresentationPort};

pub use curated_domain::RunState;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{
    MockAchievementPort, MockDungeonPort, MockLocalizationPort, MockPresentationPort,
};

#[cfg(test)]
pub use testing::MockClockPort;

#[cfg(test)]
pub use curated_domain::MockRunState;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;
