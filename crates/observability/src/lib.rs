//! Shared logging setup for the generator binaries.

pub mod tracing;

pub use tracing::init;
