//! Sales generators.
//!
//! Two independent engines over the same catalog and event calendar: a
//! transaction-count-driven simulation of customer visits with inflated
//! prices, and a per-product daily velocity simulation at base prices. Both
//! are pure domain logic (no IO); the binaries drive them day by day.

pub mod basket;
pub mod profile;
pub mod transactions;
pub mod velocity;

pub use basket::{BasketLine, PricedCatalog, build_basket};
pub use profile::{CustomerProfile, PaymentMethod, ProfileParams};
pub use transactions::{Transaction, TransactionLine, TransactionSimulator};
pub use velocity::{VelocityRecord, VelocitySimulator};
