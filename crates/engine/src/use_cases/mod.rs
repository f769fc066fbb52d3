//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod victory;

pub use victory::{VictoryEvaluator, VictoryOutcome, VictoryRecord, VictoryScreenTransition};
