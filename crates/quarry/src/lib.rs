//! Quarry facade crate.
//!
//! Re-exports the engine surface of `quarry-core`: entity models, the two
//! predicate compiler flavors, projection analysis, and fetch planning.
//! Library users depend on this crate; `quarry-core` is the implementation.

pub use quarry_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use quarry_core::{engine::Engine, error::Error, DEFAULT_MERGE_DEPTH};

///
/// Prelude
///

pub mod prelude {
    pub use quarry_core::prelude::*;
}
