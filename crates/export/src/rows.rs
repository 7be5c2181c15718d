//! Row shapes for the exported CSV files.
//!
//! Field order is column order. Headers come straight from the field names,
//! so renaming a field here changes the file format.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use sarisim_catalog::{Barcode, Brand};
use sarisim_core::Centavos;
use sarisim_demand::{EventCalendar, EventTag};
use sarisim_sales::{Transaction, TransactionLine, VelocityRecord};
use sarisim_supply::{InventoryBatch, Supplier, SupplierId, SupplierReturn};

// -------------------------
// Sales history
// -------------------------

/// One line of `sales_history.csv`: a single product within a transaction.
#[derive(Debug, Clone, Serialize)]
pub struct SalesRow<'a> {
    pub transaction_id: &'a str,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_type: &'a str,
    pub barcode: &'a Barcode,
    pub product_name: &'a str,
    pub brand: &'a Brand,
    pub category: &'a str,
    pub quantity: i64,
    pub unit_price: Centavos,
    pub cost_price: Centavos,
    pub subtotal: Centavos,
    pub cost_total: Centavos,
    pub profit: Centavos,
    pub payment_method: &'a str,
    pub is_event: bool,
    pub event_source: &'a str,
    pub event_name: &'a str,
    pub inflation_factor: String,
}

impl<'a> SalesRow<'a> {
    pub fn new(tx: &'a Transaction<'a>, line: &'a TransactionLine<'a>) -> Self {
        let (event_source, event_name) = event_columns(line.event.as_ref());
        Self {
            transaction_id: &tx.id,
            date: tx.date,
            time: tx.time,
            customer_type: tx.profile.as_str(),
            barcode: line.product.barcode(),
            product_name: line.product.name(),
            brand: line.product.brand(),
            category: line.product.category().as_str(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            cost_price: line.unit_cost,
            subtotal: line.subtotal(),
            cost_total: line.cost_total(),
            profit: line.profit(),
            payment_method: tx.payment.as_str(),
            is_event: line.is_event(),
            event_source,
            event_name,
            inflation_factor: four_dp(tx.inflation_factor),
        }
    }
}

// -------------------------
// Daily velocity
// -------------------------

/// One line of `daily_sales.csv`: one product's aggregate day.
#[derive(Debug, Clone, Serialize)]
pub struct VelocityRow<'a> {
    pub date: NaiveDate,
    pub barcode: &'a Barcode,
    pub product_name: &'a str,
    pub brand: &'a Brand,
    pub category: &'a str,
    pub quantity: i64,
    pub retail_price: Centavos,
    pub cost_price: Centavos,
    pub subtotal: Centavos,
    pub cost_total: Centavos,
    pub profit: Centavos,
    pub payment_method: &'a str,
    pub is_event: bool,
    pub event_source: &'a str,
    pub event_name: &'a str,
    pub seasonality_multiplier: String,
    pub total_multiplier: String,
}

impl<'a> VelocityRow<'a> {
    pub fn new(record: &'a VelocityRecord<'a>) -> Self {
        let (event_source, event_name) = event_columns(record.event.as_ref());
        Self {
            date: record.date,
            barcode: record.product.barcode(),
            product_name: record.product.name(),
            brand: record.product.brand(),
            category: record.product.category().as_str(),
            quantity: record.quantity,
            retail_price: record.product.base_retail(),
            cost_price: record.product.base_cost(),
            subtotal: record.subtotal(),
            cost_total: record.cost_total(),
            profit: record.profit(),
            payment_method: record.payment.as_str(),
            is_event: record.is_event(),
            event_source,
            event_name,
            seasonality_multiplier: two_dp(record.seasonality_multiplier),
            total_multiplier: two_dp(record.total_multiplier),
        }
    }
}

// -------------------------
// Events log
// -------------------------

/// One line of `events_log.csv`.
///
/// Campaigns carry the affected brand, promos the affected barcodes, and
/// holidays neither.
#[derive(Debug, Clone, Serialize)]
pub struct EventRow<'a> {
    pub name: &'a str,
    pub source: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: String,
    pub affected_brand: &'a str,
    pub affected_barcodes: String,
}

/// Every calendar entry as a log row: campaigns, then promos, then holidays.
pub fn event_rows(calendar: &EventCalendar) -> Vec<EventRow<'_>> {
    let mut rows = Vec::new();
    for campaign in calendar.campaigns() {
        rows.push(EventRow {
            name: &campaign.name,
            source: "MANUFACTURER_CAMPAIGN",
            start_date: campaign.span.start(),
            end_date: campaign.span.end(),
            multiplier: two_dp(campaign.multiplier),
            affected_brand: campaign.brand.as_str(),
            affected_barcodes: String::new(),
        });
    }
    for promo in calendar.promos() {
        rows.push(EventRow {
            name: &promo.name,
            source: "STORE_DISCOUNT",
            start_date: promo.span.start(),
            end_date: promo.span.end(),
            multiplier: two_dp(promo.multiplier),
            affected_brand: "",
            affected_barcodes: join_barcodes(&promo.barcodes),
        });
    }
    for holiday in calendar.holidays() {
        rows.push(EventRow {
            name: &holiday.name,
            source: "HOLIDAY",
            start_date: holiday.span.start(),
            end_date: holiday.span.end(),
            multiplier: two_dp(holiday.multiplier),
            affected_brand: "",
            affected_barcodes: String::new(),
        });
    }
    rows
}

// -------------------------
// Supply files
// -------------------------

/// One line of `suppliers.csv`.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierRow<'a> {
    pub id: SupplierId,
    pub name: &'a str,
    pub contact_person: &'a str,
    pub contact_number: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub notes: &'a str,
    pub status: &'static str,
}

impl<'a> SupplierRow<'a> {
    pub fn new(supplier: &'a Supplier) -> Self {
        Self {
            id: supplier.id,
            name: &supplier.name,
            contact_person: &supplier.contact.person,
            contact_number: &supplier.contact.number,
            email: &supplier.contact.email,
            address: &supplier.contact.address,
            notes: &supplier.notes,
            status: supplier.status.as_str(),
        }
    }
}

/// One line of `inventory_batches.csv`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow<'a> {
    pub id: u64,
    pub product_barcode: &'a Barcode,
    pub product_name: &'a str,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub received_date: String,
    pub supplier_ref: &'a str,
    pub supplier_name: &'a str,
    pub supplier_id: SupplierId,
    pub cost_price: Centavos,
    pub status: &'static str,
}

impl<'a> BatchRow<'a> {
    pub fn new(batch: &'a InventoryBatch) -> Self {
        Self {
            id: batch.id,
            product_barcode: &batch.barcode,
            product_name: &batch.product_name,
            quantity: batch.quantity,
            expiry_date: batch.expiry_date,
            received_date: midnight_stamp(batch.received_date),
            supplier_ref: &batch.supplier_ref,
            supplier_name: &batch.supplier_name,
            supplier_id: batch.supplier_id,
            cost_price: batch.cost_price,
            status: "ACTIVE",
        }
    }
}

/// One line of `stock_movements_returns.csv`.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnRow<'a> {
    pub id: u64,
    pub batch_id: u64,
    pub product_barcode: &'a Barcode,
    pub product_name: &'a str,
    pub supplier_id: SupplierId,
    pub supplier_name: &'a str,
    pub movement_type: &'static str,
    pub quantity_change: i64,
    pub reason: &'static str,
    pub reference: &'a str,
    pub cost_price: Centavos,
    pub created_at: String,
}

impl<'a> ReturnRow<'a> {
    pub fn new(ret: &'a SupplierReturn) -> Self {
        Self {
            id: ret.id,
            batch_id: ret.batch_id,
            product_barcode: &ret.barcode,
            product_name: &ret.product_name,
            supplier_id: ret.supplier_id,
            supplier_name: &ret.supplier_name,
            movement_type: "SUPPLIER_RETURN",
            quantity_change: ret.quantity_change,
            reason: ret.reason.as_str(),
            reference: &ret.reference,
            cost_price: ret.cost_price,
            created_at: midnight_stamp(ret.created_date),
        }
    }
}

// -------------------------
// Field rendering
// -------------------------

fn event_columns(event: Option<&EventTag>) -> (&str, &str) {
    match event {
        Some(tag) => (tag.source.as_str(), tag.name.as_str()),
        None => ("", ""),
    }
}

fn join_barcodes(barcodes: &[Barcode]) -> String {
    barcodes
        .iter()
        .map(Barcode::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

fn two_dp(value: f64) -> String {
    format!("{value:.2}")
}

fn four_dp(value: f64) -> String {
    format!("{value:.4}")
}

/// Batch timestamps are dates rendered at midnight, matching the downstream
/// importer's `%Y-%m-%d %H:%M:%S` expectation.
fn midnight_stamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
