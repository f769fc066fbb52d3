//! Test fixtures: catalog loading and an in-memory host game.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{fixture_registry, FakeHost};
//!
//! #[test]
//! fn pauper_wins_on_gold() {
//!     let host = FakeHost::new();
//!     host.update(|run| run.gold = 999);
//!     let evaluator = host.evaluator(fixture_registry());
//!     assert!(evaluator.check_gold_threshold_win_condition("Pauper").is_victory());
//! }
//! ```

pub mod fake_host;

use std::path::PathBuf;
use std::sync::Arc;

use curated_domain::ChallengeRegistry;

use crate::infrastructure::catalog::load_registry;

pub use fake_host::{FakeHost, HostCall, RunSnapshot};

/// Path of a file under the crate's `test_data/` directory.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(name)
}

/// Registry built from `test_data/challenges.json`.
///
/// # Panics
///
/// Panics if the fixture catalog is missing or invalid.
pub fn fixture_registry() -> Arc<ChallengeRegistry> {
    let path = fixture_path("challenges.json");
    let registry = load_registry(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}': {}", path.display(), e));
    Arc::new(registry)
}
