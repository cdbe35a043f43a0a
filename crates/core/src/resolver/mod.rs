//! Resolvers compute the destination filename for a matched rule.
//!
//! A resolver has three possible outcomes, and the distinction carries the
//! engine's fall-through behavior:
//!
//! - `Resolved(name)` - the rule applies, place the file under `name`.
//! - `Declined` - the matcher accepted but the rule does not actually apply
//!   (no extractable release id, no usable title); the engine moves on to
//!   the next rule for the same file.
//! - `Err(ResolverError)` - a real failure (transport error, unexpected
//!   response status, unreadable metadata); the engine stops scanning rules
//!   and leaves the file where it is.
//!
//! Any filename component derived from remote content is sanitized into a
//! single safe path segment before it is returned.

mod acgrip;
mod error;
mod local;
mod sanitize;
mod traits;

pub use acgrip::AcgRipResolver;
pub use error::ResolverError;
pub use local::MetadataNameResolver;
pub use sanitize::sanitize_segment;
pub use traits::{Resolution, Resolver};
