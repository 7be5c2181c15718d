//! CSV export and run summaries for the generated datasets.
//!
//! Row layouts are fixed by the downstream importer; see [`rows`] for the
//! column orders. Writers stream, reports accumulate alongside them.

pub mod report;
pub mod rows;
pub mod writer;

pub use report::{SalesReport, SupplyReport, VelocityReport};
pub use writer::{
    DailySalesWriter, ExportError, ExportResult, SalesHistoryWriter, write_batches_csv,
    write_events_csv, write_returns_csv, write_suppliers_csv,
};
