//! Curated Challenges engine library.
//!
//! Evaluates challenge win conditions against the live run and fires the
//! victory sequence through host game ports.
//!
//! ## Structure
//!
//! - `use_cases/` - Victory evaluation
//! - `infrastructure/` - Port traits, catalog loading, settings, clock
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures: fixture catalog and an in-memory host game.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{App, HostPorts};
