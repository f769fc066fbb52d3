//! Host game ports.
//!
//! The engine never touches the host game directly. Read-only run queries go
//! through [`curated_domain::RunState`]; everything with a side effect goes
//! through one of these traits. All calls are synchronous and made from the
//! host's main loop.

use curated_domain::{AchievementId, RoomPhase, ScreenMode};

// =============================================================================
// Achievements
// =============================================================================

/// Achievement subsystem. Unlocking is idempotent and fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait AchievementPort: Send + Sync {
    fn unlock_achievement(&self, id: &AchievementId);
}

// =============================================================================
// Dungeon
// =============================================================================

/// Mutable dungeon state owned by the host game.
#[cfg_attr(test, mockall::automock)]
pub trait DungeonPort: Send + Sync {
    /// Set the phase of the room the player is currently in.
    fn set_room_phase(&self, phase: RoomPhase);
}

// =============================================================================
// Presentation
// =============================================================================

/// Audio and screen control used by the victory transition.
#[cfg_attr(test, mockall::automock)]
pub trait PresentationPort: Send + Sync {
    fn silence_temp_bgm(&self);
    fn silence_bgm(&self);
    fn play_boss_stinger(&self);
    /// Freeze the run clock.
    fn stop_clock(&self);
    /// Build and show the victory screen.
    fn open_victory_screen(&self);
    fn set_screen(&self, mode: ScreenMode);
    fn show_banner(&self, text: &str);
}

// =============================================================================
// Localization
// =============================================================================

/// UI string table lookup.
#[cfg_attr(test, mockall::automock)]
pub trait LocalizationPort: Send + Sync {
    /// Entry `index` of the UI string `key`, if the table has one.
    fn ui_text(&self, key: &str, index: usize) -> Option<String>;
}
