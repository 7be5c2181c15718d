//! Shared plumbing for the generator binaries.

pub mod config;
pub mod run;

pub use config::RunConfig;
