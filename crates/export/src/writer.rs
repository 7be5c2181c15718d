//! CSV writers for the generated datasets.
//!
//! The two sales files are written through streaming writers so a multi-year
//! run never has to hold every row in memory; the supply-side files are small
//! enough to write in one call.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use sarisim_demand::EventCalendar;
use sarisim_sales::{Transaction, VelocityRecord};
use sarisim_supply::{InventoryBatch, Supplier, SupplierReturn};

use crate::rows::{self, BatchRow, ReturnRow, SalesRow, SupplierRow, VelocityRow};

pub type ExportResult<T> = Result<T, ExportError>;

/// Failure while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Streaming writer for `sales_history.csv`. Each transaction becomes one
/// row per line.
pub struct SalesHistoryWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl SalesHistoryWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> ExportResult<Self> {
        Ok(Self {
            inner: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> SalesHistoryWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            inner: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_transaction(&mut self, tx: &Transaction<'_>) -> ExportResult<()> {
        for line in &tx.lines {
            self.inner.serialize(SalesRow::new(tx, line))?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> ExportResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Streaming writer for `daily_sales.csv`.
pub struct DailySalesWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl DailySalesWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> ExportResult<Self> {
        Ok(Self {
            inner: csv::Writer::from_path(path)?,
        })
    }
}

impl<W: Write> DailySalesWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            inner: csv::Writer::from_writer(writer),
        }
    }

    pub fn write_record(&mut self, record: &VelocityRecord<'_>) -> ExportResult<()> {
        self.inner.serialize(VelocityRow::new(record))?;
        Ok(())
    }

    pub fn finish(mut self) -> ExportResult<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Write the full event calendar to `events_log.csv`.
pub fn write_events_csv(path: impl AsRef<Path>, calendar: &EventCalendar) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows::event_rows(calendar) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the supplier directory to `suppliers.csv`.
pub fn write_suppliers_csv(path: impl AsRef<Path>, suppliers: &[Supplier]) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for supplier in suppliers {
        writer.serialize(SupplierRow::new(supplier))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write delivery batches to `inventory_batches.csv`.
pub fn write_batches_csv(path: impl AsRef<Path>, batches: &[InventoryBatch]) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for batch in batches {
        writer.serialize(BatchRow::new(batch))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write supplier returns to `stock_movements_returns.csv`.
pub fn write_returns_csv(path: impl AsRef<Path>, returns: &[SupplierReturn]) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for ret in returns {
        writer.serialize(ReturnRow::new(ret))?;
    }
    writer.flush()?;
    Ok(())
}
