//! Value objects - Immutable types defined by their values

mod trigger_context;

pub use trigger_context::TriggerContext;
