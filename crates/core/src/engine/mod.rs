//! The classification engine.
//!
//! Walks the rule table in order for one candidate file at a time and
//! settles on a placement or leaves the file alone. Per file the walk is a
//! small state machine: scan until a matcher accepts, resolve, and then
//! either finish with a placement, fall through to the next rule on a
//! decline, or abort the file on a resolver failure. Files never affect
//! each other; a failure isolates exactly one candidate.

mod error;
mod eval;
mod types;

pub use error::EngineError;
pub use eval::RuleEngine;
pub use types::{Classification, Placement};
