//! Formula → cask fallback.
//!
//! A package is first looked up as a formula. If that fails for any reason
//! other than the tool being impossible to run, the lookup is retried once as
//! a cask after a random delay. There is no further backoff.

mod policy;
mod run;

pub use policy::{FallbackDecision, FallbackPolicy};
pub use run::lookup_with_fallback;
