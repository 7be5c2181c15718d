//! Supply-side simulation (suppliers, delivery batches, returns).
//!
//! This crate contains the restock schedule and supplier return generator,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod batches;
pub mod supplier;

pub use batches::{
    InventoryBatch, ReturnReason, SupplierReturn, SupplyLedger, SupplySimulator,
};
pub use supplier::{ContactInfo, Supplier, SupplierId, SupplierStatus, directory};
