//! Classifier adapter for medcheck.
//!
//! Wraps an injected zero-shot classification runtime (text + candidate
//! labels → scored labels) with initialization state tracking, single-flight
//! startup, and the fallback policy that keeps analysis results usable when
//! the model is unavailable or inconclusive.

pub mod analysis;
pub mod runtime;

pub use analysis::*;
pub use runtime::*;
