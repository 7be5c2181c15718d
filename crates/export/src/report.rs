//! Run summaries printed after the CSV files are written.
//!
//! The sales and velocity reports accumulate while rows stream out, so a
//! run never revisits data it has already written. The supply report is
//! built in one pass over the finished ledger.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate};

use sarisim_catalog::{Barcode, Product};
use sarisim_core::{Centavos, DateSpan, InflationModel};
use sarisim_demand::EventSource;
use sarisim_sales::{CustomerProfile, Transaction, VelocityRecord};
use sarisim_supply::{Supplier, SupplyLedger};

const PROFILE_ORDER: [CustomerProfile; 3] = [
    CustomerProfile::Snacker,
    CustomerProfile::Household,
    CustomerProfile::Vendor,
];

const SOURCE_ORDER: [EventSource; 3] = [
    EventSource::ManufacturerCampaign,
    EventSource::StoreDiscount,
    EventSource::Holiday,
];

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    revenue: Centavos,
    cost: Centavos,
    transactions: u64,
    rows: u64,
    units: i64,
}

impl Totals {
    fn profit(self) -> Centavos {
        self.revenue - self.cost
    }

    fn margin_pct(self) -> f64 {
        if self.revenue.centavos() > 0 {
            self.profit().to_pesos() / self.revenue.to_pesos() * 100.0
        } else {
            0.0
        }
    }

    fn avg_transaction(self) -> f64 {
        if self.transactions > 0 {
            self.revenue.to_pesos() / self.transactions as f64
        } else {
            0.0
        }
    }
}

fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Accumulating summary of a transaction-history run.
#[derive(Debug, Clone)]
pub struct SalesReport {
    range: DateSpan,
    inflation: InflationModel,
    overall: Totals,
    by_year: BTreeMap<i32, Totals>,
    by_profile: [Totals; 3],
    event_rows: u64,
    event_revenue: Centavos,
}

impl SalesReport {
    pub fn new(range: DateSpan, inflation: InflationModel) -> Self {
        Self {
            range,
            inflation,
            overall: Totals::default(),
            by_year: BTreeMap::new(),
            by_profile: [Totals::default(); 3],
            event_rows: 0,
            event_revenue: Centavos::ZERO,
        }
    }

    pub fn record(&mut self, tx: &Transaction<'_>) {
        let revenue = tx.total();
        let cost = tx.cost_total();
        let units = tx.units();
        let rows = tx.lines.len() as u64;

        let buckets = [
            &mut self.overall,
            self.by_year.entry(tx.date.year()).or_default(),
            &mut self.by_profile[profile_slot(tx.profile)],
        ];
        for totals in buckets {
            totals.revenue += revenue;
            totals.cost += cost;
            totals.transactions += 1;
            totals.rows += rows;
            totals.units += units;
        }

        for line in &tx.lines {
            if line.is_event() {
                self.event_rows += 1;
                self.event_revenue += line.subtotal();
            }
        }
    }

    pub fn transactions(&self) -> u64 {
        self.overall.transactions
    }

    pub fn rows(&self) -> u64 {
        self.overall.rows
    }

    pub fn revenue(&self) -> Centavos {
        self.overall.revenue
    }
}

fn profile_slot(profile: CustomerProfile) -> usize {
    match profile {
        CustomerProfile::Snacker => 0,
        CustomerProfile::Household => 1,
        CustomerProfile::Vendor => 2,
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "sales history {} to {}",
            self.range.start(),
            self.range.end()
        )?;

        writeln!(f)?;
        writeln!(
            f,
            "{:<6} {:>16} {:>16} {:>14} {:>8} {:>10} {:>8}",
            "year", "revenue", "cogs", "profit", "margin", "avg tx", "growth"
        )?;
        let mut prev_revenue: Option<Centavos> = None;
        for (year, totals) in &self.by_year {
            let growth = match prev_revenue {
                Some(prev) if prev.centavos() > 0 => {
                    let pct = (totals.revenue.to_pesos() - prev.to_pesos()) / prev.to_pesos();
                    format!("{:+.1}%", pct * 100.0)
                }
                _ => "-".to_string(),
            };
            writeln!(
                f,
                "{year:<6} {:>16} {:>16} {:>14} {:>7.1}% {:>10.2} {:>8}",
                totals.revenue,
                totals.cost,
                totals.profit(),
                totals.margin_pct(),
                totals.avg_transaction(),
                growth
            )?;
            prev_revenue = Some(totals.revenue);
        }

        writeln!(f)?;
        writeln!(f, "transactions:    {}", self.overall.transactions)?;
        writeln!(f, "rows written:    {}", self.overall.rows)?;
        writeln!(f, "units sold:      {}", self.overall.units)?;
        writeln!(f, "revenue:         {}", self.overall.revenue)?;
        writeln!(f, "cogs:            {}", self.overall.cost)?;
        writeln!(
            f,
            "profit:          {} ({:.1}% margin)",
            self.overall.profit(),
            self.overall.margin_pct()
        )?;
        writeln!(f, "avg transaction: {:.2}", self.overall.avg_transaction())?;

        writeln!(f)?;
        writeln!(f, "by customer profile")?;
        for (profile, totals) in PROFILE_ORDER.iter().zip(&self.by_profile) {
            writeln!(
                f,
                "  {:<10} {} tx ({:.0}%), revenue {} ({:.1}%), avg ticket {:.2}",
                profile.as_str(),
                totals.transactions,
                share(
                    totals.transactions as f64,
                    self.overall.transactions as f64
                ),
                totals.revenue,
                share(totals.revenue.to_pesos(), self.overall.revenue.to_pesos()),
                totals.avg_transaction()
            )?;
        }

        let end_factor = self.inflation.factor(self.range.end());
        writeln!(f)?;
        writeln!(
            f,
            "inflation factor at {}: {:.4} ({:+.1}% over the run)",
            self.range.end(),
            end_factor,
            (end_factor - 1.0) * 100.0
        )?;

        let organic_rows = self.overall.rows - self.event_rows;
        writeln!(f)?;
        writeln!(
            f,
            "event rows:   {} ({:.1}%)",
            self.event_rows,
            share(self.event_rows as f64, self.overall.rows as f64)
        )?;
        writeln!(
            f,
            "organic rows: {} ({:.1}%)",
            organic_rows,
            share(organic_rows as f64, self.overall.rows as f64)
        )?;
        writeln!(
            f,
            "event revenue: {} ({:.1}% of total)",
            self.event_revenue,
            share(
                self.event_revenue.to_pesos(),
                self.overall.revenue.to_pesos()
            )
        )?;
        Ok(())
    }
}

/// Accumulating summary of a daily-velocity run.
#[derive(Debug, Clone, Default)]
pub struct VelocityReport {
    rows: u64,
    units: i64,
    revenue: Centavos,
    cost: Centavos,
    event_rows: u64,
    event_revenue: Centavos,
    by_source: [u64; 3],
}

impl VelocityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &VelocityRecord<'_>) {
        self.rows += 1;
        self.units += record.quantity;
        self.revenue += record.subtotal();
        self.cost += record.cost_total();
        if let Some(tag) = &record.event {
            self.event_rows += 1;
            self.event_revenue += record.subtotal();
            self.by_source[source_slot(tag.source)] += 1;
        }
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn revenue(&self) -> Centavos {
        self.revenue
    }
}

fn source_slot(source: EventSource) -> usize {
    match source {
        EventSource::ManufacturerCampaign => 0,
        EventSource::StoreDiscount => 1,
        EventSource::Holiday => 2,
    }
}

impl fmt::Display for VelocityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profit = self.revenue - self.cost;
        let margin = if self.revenue.centavos() > 0 {
            profit.to_pesos() / self.revenue.to_pesos() * 100.0
        } else {
            0.0
        };

        writeln!(f, "daily velocity summary")?;
        writeln!(f, "rows:       {}", self.rows)?;
        writeln!(f, "units sold: {}", self.units)?;
        writeln!(f, "revenue:    {}", self.revenue)?;
        writeln!(f, "cost:       {}", self.cost)?;
        writeln!(f, "profit:     {profit} ({margin:.1}% margin)")?;

        let organic = self.rows - self.event_rows;
        writeln!(f)?;
        writeln!(
            f,
            "event rows:   {} ({:.1}%)",
            self.event_rows,
            share(self.event_rows as f64, self.rows as f64)
        )?;
        writeln!(
            f,
            "organic rows: {} ({:.1}%)",
            organic,
            share(organic as f64, self.rows as f64)
        )?;
        writeln!(
            f,
            "event revenue: {} ({:.1}% of total)",
            self.event_revenue,
            share(self.event_revenue.to_pesos(), self.revenue.to_pesos())
        )?;

        writeln!(f)?;
        writeln!(f, "rows by event source")?;
        for (source, count) in SOURCE_ORDER.iter().zip(&self.by_source) {
            writeln!(f, "  {:<21} {}", source.as_str(), count)?;
        }
        Ok(())
    }
}

/// One-pass summary of a finished supply ledger.
#[derive(Debug, Clone)]
pub struct SupplyReport {
    suppliers: usize,
    batches: usize,
    returns: usize,
    top_suppliers: Vec<(String, u64)>,
    by_category: Vec<(&'static str, u64)>,
    delivery_value: Centavos,
    by_reason: Vec<(&'static str, u64)>,
    return_value: Centavos,
    received: Option<(NaiveDate, NaiveDate)>,
}

impl SupplyReport {
    pub fn new(ledger: &SupplyLedger, suppliers: &[Supplier], products: &[Product]) -> Self {
        let mut by_supplier: BTreeMap<&str, u64> = BTreeMap::new();
        for batch in &ledger.batches {
            *by_supplier.entry(batch.supplier_name.as_str()).or_default() += 1;
        }
        let mut top_suppliers: Vec<(String, u64)> = by_supplier
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        top_suppliers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_suppliers.truncate(5);

        let categories: HashMap<&Barcode, &'static str> = products
            .iter()
            .map(|p| (p.barcode(), p.category().as_str()))
            .collect();
        let mut category_counts: BTreeMap<&'static str, u64> = BTreeMap::new();
        for batch in &ledger.batches {
            let category = categories.get(&batch.barcode).copied().unwrap_or("UNKNOWN");
            *category_counts.entry(category).or_default() += 1;
        }
        let mut by_category: Vec<(&'static str, u64)> = category_counts.into_iter().collect();
        by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let mut reason_counts: BTreeMap<&'static str, u64> = BTreeMap::new();
        for ret in &ledger.returns {
            *reason_counts.entry(ret.reason.as_str()).or_default() += 1;
        }
        let mut by_reason: Vec<(&'static str, u64)> = reason_counts.into_iter().collect();
        by_reason.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let delivery_value = ledger
            .batches
            .iter()
            .map(|b| b.cost_price * b.quantity)
            .sum();
        let return_value = ledger
            .returns
            .iter()
            .map(|r| r.cost_price * r.quantity_change.abs())
            .sum();

        let received = ledger
            .batches
            .iter()
            .map(|b| b.received_date)
            .fold(None, |acc: Option<(NaiveDate, NaiveDate)>, date| {
                Some(match acc {
                    Some((min, max)) => (min.min(date), max.max(date)),
                    None => (date, date),
                })
            });

        Self {
            suppliers: suppliers.len(),
            batches: ledger.batches.len(),
            returns: ledger.returns.len(),
            top_suppliers,
            by_category,
            delivery_value,
            by_reason,
            return_value,
            received,
        }
    }
}

impl fmt::Display for SupplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "supply run summary")?;
        writeln!(f, "suppliers: {}", self.suppliers)?;
        writeln!(f, "batches:   {}", self.batches)?;
        writeln!(f, "returns:   {}", self.returns)?;

        writeln!(f)?;
        writeln!(f, "top suppliers by deliveries")?;
        for (name, count) in &self.top_suppliers {
            writeln!(f, "  {name}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "batches by category")?;
        for (category, count) in &self.by_category {
            writeln!(f, "  {category}: {count}")?;
        }
        writeln!(f, "total delivery value: {}", self.delivery_value)?;

        writeln!(f)?;
        writeln!(f, "returns by reason")?;
        for (reason, count) in &self.by_reason {
            writeln!(f, "  {reason}: {count}")?;
        }
        writeln!(f, "total return value: {}", self.return_value)?;

        if let Some((first, last)) = self.received {
            let days = (last - first).num_days();
            writeln!(f)?;
            writeln!(f, "deliveries from {first} to {last} ({days} days)")?;
        }
        Ok(())
    }
}
