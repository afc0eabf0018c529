//! Error types for Breakwater
//!
//! Every fallible operation in this crate happens at construction time:
//! validating a configuration, parsing one from TOML, or finding a runtime
//! to schedule cooldown timers on. Recording outcomes never fails.

mod constructors;
mod types;

pub use types::{BreakwaterError, BreakwaterResult};
