//! Infrastructure implementations.
//!
//! Port traits for the host game plus the adapters the engine owns itself:
//! clock, catalog loading and settings.

pub mod catalog;
pub mod clock;
pub mod ports;
pub mod settings;
