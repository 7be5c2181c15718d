//! `sarisim-core` — shared simulation primitives.
//!
//! Pure building blocks (money, date spans, inflation, seed derivation) with
//! no I/O concerns.

pub mod calendar;
pub mod error;
pub mod inflation;
pub mod money;
pub mod rng;

pub use calendar::DateSpan;
pub use error::{SimError, SimResult};
pub use inflation::InflationModel;
pub use money::Centavos;
