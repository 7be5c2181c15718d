//! Delivery batches and supplier returns over a date range.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use rand::Rng;

use sarisim_catalog::{Barcode, Category, Product};
use sarisim_core::{Centavos, DateSpan, InflationModel, SimError, SimResult};

use crate::supplier::{Supplier, SupplierId};

/// Average days between restocks of one product; actual gaps vary by
/// -3 to +7 days.
const RESTOCK_FREQUENCY_DAYS: i64 = 14;

/// Share of batches that come back as supplier returns.
const RETURN_PROBABILITY: f64 = 0.08;

/// Delivery of one product from one supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryBatch {
    pub id: u64,
    pub barcode: Barcode,
    pub product_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub received_date: NaiveDate,
    pub supplier_ref: String,
    pub supplier_name: String,
    pub supplier_id: SupplierId,
    pub cost_price: Centavos,
}

/// Why a batch went back to the supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnReason {
    NearExpiry,
    DamagedPackaging,
    Recall,
    QualityComplaint,
    ExpiredStock,
}

impl ReturnReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnReason::NearExpiry => "Near expiry - supplier policy return",
            ReturnReason::DamagedPackaging => {
                "Damaged packaging discovered during inventory check"
            }
            ReturnReason::Recall => "Product recall by manufacturer",
            ReturnReason::QualityComplaint => "Quality issue reported by customers",
            ReturnReason::ExpiredStock => "Expired stock - supplier credit agreement",
        }
    }

    fn sample(rng: &mut impl Rng) -> Self {
        const ALL: [ReturnReason; 5] = [
            ReturnReason::NearExpiry,
            ReturnReason::DamagedPackaging,
            ReturnReason::Recall,
            ReturnReason::QualityComplaint,
            ReturnReason::ExpiredStock,
        ];
        ALL[rng.gen_range(0..ALL.len())]
    }
}

/// Stock movement sending part of a batch back to its supplier.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierReturn {
    pub id: u64,
    pub batch_id: u64,
    pub barcode: Barcode,
    pub product_name: String,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    /// Negative: stock leaves the store.
    pub quantity_change: i64,
    pub reason: ReturnReason,
    pub reference: String,
    pub cost_price: Centavos,
    pub created_date: NaiveDate,
}

/// Everything one supply run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyLedger {
    pub batches: Vec<InventoryBatch>,
    pub returns: Vec<SupplierReturn>,
}

/// Restock generator: walks the date range day by day and delivers each
/// product on its own roughly-fortnightly schedule.
pub struct SupplySimulator<'a> {
    products: &'a [Product],
    suppliers: &'a [Supplier],
    inflation: InflationModel,
}

impl<'a> SupplySimulator<'a> {
    pub fn new(
        products: &'a [Product],
        suppliers: &'a [Supplier],
        inflation: InflationModel,
    ) -> SimResult<Self> {
        if suppliers.is_empty() {
            return Err(SimError::validation("supply run needs at least one supplier"));
        }
        if products.iter().all(Product::is_never_sell) {
            return Err(SimError::validation("catalog has no restockable products"));
        }
        Ok(Self {
            products,
            suppliers,
            inflation,
        })
    }

    pub fn simulate(&self, range: DateSpan, rng: &mut impl Rng) -> SimResult<SupplyLedger> {
        let by_category = self.suppliers_by_category();

        // First delivery of each product lands within two weeks of the start.
        let mut next_restock: HashMap<&Barcode, NaiveDate> = self
            .restockable()
            .map(|p| {
                let offset = rng.gen_range(0..=RESTOCK_FREQUENCY_DAYS) as u64;
                (p.barcode(), range.start() + Days::new(offset))
            })
            .collect();

        let mut batches = Vec::new();
        let mut returns = Vec::new();
        let mut batch_id: u64 = 1;
        let mut return_id: u64 = 1;

        for day in range.iter_days() {
            for product in self.restockable() {
                let due = next_restock.get_mut(product.barcode()).ok_or_else(|| {
                    SimError::invariant(format!("unscheduled product {}", product.barcode()))
                })?;
                if day < *due {
                    continue;
                }

                let supplier = match by_category.get(&product.category()) {
                    Some(candidates) => candidates[rng.gen_range(0..candidates.len())],
                    None => &self.suppliers[rng.gen_range(0..self.suppliers.len())],
                };

                let shelf_days = shelf_life_days(product.category(), rng);
                let batch = InventoryBatch {
                    id: batch_id,
                    barcode: product.barcode().clone(),
                    product_name: product.name().to_string(),
                    quantity: delivery_quantity(product.category(), day, rng),
                    expiry_date: day + Days::new(shelf_days as u64),
                    received_date: day,
                    supplier_ref: supplier.reference(day, batch_id),
                    supplier_name: supplier.name.clone(),
                    supplier_id: supplier.id,
                    cost_price: self.inflation.adjust(product.base_cost(), day),
                };

                if rng.r#gen::<f64>() < RETURN_PROBABILITY {
                    if let Some(ret) = build_return(return_id, &batch, range.end(), rng) {
                        returns.push(ret);
                        return_id += 1;
                    }
                }

                batches.push(batch);
                batch_id += 1;

                let gap = RESTOCK_FREQUENCY_DAYS + rng.gen_range(-3..=7);
                *due = day + Days::new(gap as u64);
            }
        }

        Ok(SupplyLedger { batches, returns })
    }

    fn restockable(&self) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(|p| !p.is_never_sell())
    }

    fn suppliers_by_category(&self) -> HashMap<Category, Vec<&Supplier>> {
        let mut map: HashMap<Category, Vec<&Supplier>> = HashMap::new();
        for supplier in self.suppliers {
            for &category in &supplier.categories {
                map.entry(category).or_default().push(supplier);
            }
        }
        map
    }
}

/// Delivery size: 10-200 units, with fast movers half again larger, cases
/// delivered 5-30 at a time, and seasonal buildup before the holidays.
fn delivery_quantity(category: Category, date: NaiveDate, rng: &mut impl Rng) -> i64 {
    let base = match category {
        Category::SoftdrinksCase => rng.gen_range(5..=30),
        Category::Soda | Category::Snack | Category::InstantNoodles => {
            (rng.gen_range(10..=200) as f64 * 1.5) as i64
        }
        _ => rng.gen_range(10..=200),
    };
    match date.month() {
        12 => (base as f64 * 1.8) as i64,
        3 | 4 | 11 => (base as f64 * 1.3) as i64,
        _ => base,
    }
}

/// Shelf life in days by category.
fn shelf_life_days(category: Category, rng: &mut impl Rng) -> i64 {
    match category {
        Category::Dairy | Category::Beverages => rng.gen_range(30..=180),
        Category::CannedGoods => rng.gen_range(365..=730),
        Category::PersonalCare | Category::Household => rng.gen_range(365..=1095),
        Category::Condiments => rng.gen_range(180..=365),
        _ => rng.gen_range(30..=365),
    }
}

fn build_return(
    return_id: u64,
    batch: &InventoryBatch,
    range_end: NaiveDate,
    rng: &mut impl Rng,
) -> Option<SupplierReturn> {
    // Returns surface between a month in and either near-expiry or half a
    // year, whichever comes first.
    let shelf_days = (batch.expiry_date - batch.received_date).num_days();
    let max_delay = (shelf_days - 5).min(180).max(30);
    let delay = rng.gen_range(30..=max_delay);
    let created = batch.received_date + Days::new(delay as u64);
    if created > range_end {
        return None;
    }

    let share = rng.gen_range(0.1..=0.5);
    let quantity = ((batch.quantity as f64 * share) as i64).max(1);

    Some(SupplierReturn {
        id: return_id,
        batch_id: batch.id,
        barcode: batch.barcode.clone(),
        product_name: batch.product_name.clone(),
        supplier_id: batch.supplier_id,
        supplier_name: batch.supplier_name.clone(),
        quantity_change: -quantity,
        reason: ReturnReason::sample(rng),
        reference: format!("RET-{}", batch.supplier_ref),
        cost_price: batch.cost_price,
        created_date: created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sarisim_catalog::builtin;
    use crate::supplier::directory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ledger(seed: u64) -> SupplyLedger {
        let products = builtin::products().unwrap();
        let suppliers = directory();
        let inflation = InflationModel::new(0.045, date(2024, 1, 1));
        let sim = SupplySimulator::new(&products, &suppliers, inflation).unwrap();
        let range = DateSpan::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        sim.simulate(range, &mut rng).unwrap()
    }

    #[test]
    fn batch_ids_are_sequential_from_one() {
        let ledger = ledger(1);
        for (idx, batch) in ledger.batches.iter().enumerate() {
            assert_eq!(batch.id, idx as u64 + 1);
        }
        for (idx, ret) in ledger.returns.iter().enumerate() {
            assert_eq!(ret.id, idx as u64 + 1);
        }
    }

    #[test]
    fn restocks_land_roughly_fortnightly() {
        let ledger = ledger(2);
        let mut per_product: HashMap<&Barcode, Vec<NaiveDate>> = HashMap::new();
        for batch in &ledger.batches {
            per_product.entry(&batch.barcode).or_default().push(batch.received_date);
        }

        for (barcode, dates) in per_product {
            // Batches are emitted in date order per product already.
            for pair in dates.windows(2) {
                let gap = (pair[1] - pair[0]).num_days();
                assert!(
                    (11..=21).contains(&gap),
                    "{barcode}: restock gap {gap} days"
                );
            }
            // A year of fortnightly restocks is roughly 26 deliveries.
            assert!(
                (17..=34).contains(&dates.len()),
                "{barcode}: {} deliveries",
                dates.len()
            );
        }
    }

    #[test]
    fn dead_stock_is_never_restocked() {
        let products = builtin::products().unwrap();
        let dead: Vec<&Barcode> = products
            .iter()
            .filter(|p| p.is_never_sell())
            .map(|p| p.barcode())
            .collect();
        assert!(!dead.is_empty());

        let ledger = ledger(3);
        assert!(ledger.batches.iter().all(|b| !dead.contains(&&b.barcode)));
    }

    #[test]
    fn suppliers_match_product_categories() {
        let products = builtin::products().unwrap();
        let suppliers = directory();
        let by_name: HashMap<&str, &Supplier> =
            suppliers.iter().map(|s| (s.name.as_str(), s)).collect();
        let by_barcode: HashMap<&Barcode, Category> =
            products.iter().map(|p| (p.barcode(), p.category())).collect();

        let ledger = ledger(4);
        for batch in &ledger.batches {
            let supplier = by_name[batch.supplier_name.as_str()];
            let category = by_barcode[&batch.barcode];
            assert!(
                supplier.supplies(category),
                "{} delivered {:?}",
                supplier.name,
                category
            );
        }
    }

    #[test]
    fn shelf_life_follows_the_category() {
        let products = builtin::products().unwrap();
        let by_barcode: HashMap<&Barcode, Category> =
            products.iter().map(|p| (p.barcode(), p.category())).collect();

        let ledger = ledger(5);
        for batch in &ledger.batches {
            let days = (batch.expiry_date - batch.received_date).num_days();
            let band = match by_barcode[&batch.barcode] {
                Category::Dairy | Category::Beverages => 30..=180,
                Category::CannedGoods => 365..=730,
                Category::PersonalCare | Category::Household => 365..=1095,
                Category::Condiments => 180..=365,
                _ => 30..=365,
            };
            assert!(band.contains(&days), "{}: shelf {days}", batch.barcode);
        }
    }

    #[test]
    fn case_deliveries_stay_small() {
        let products = builtin::products().unwrap();
        let cases: Vec<&Barcode> = products
            .iter()
            .filter(|p| p.category() == Category::SoftdrinksCase)
            .map(|p| p.barcode())
            .collect();

        let ledger = ledger(6);
        let mut seen = 0usize;
        for batch in ledger.batches.iter().filter(|b| cases.contains(&&b.barcode)) {
            seen += 1;
            // 5-30 cases, at most doubled by the December buildup.
            assert!((5..=54).contains(&batch.quantity), "case qty {}", batch.quantity);
        }
        assert!(seen > 0);
    }

    #[test]
    fn costs_are_inflated_to_the_received_date() {
        let products = builtin::products().unwrap();
        let by_barcode: HashMap<&Barcode, Centavos> =
            products.iter().map(|p| (p.barcode(), p.base_cost())).collect();
        let inflation = InflationModel::new(0.045, date(2024, 1, 1));

        let ledger = ledger(7);
        for batch in &ledger.batches {
            let expected = inflation.adjust(by_barcode[&batch.barcode], batch.received_date);
            assert_eq!(batch.cost_price, expected);
        }
    }

    #[test]
    fn returns_reference_their_batch() {
        let ledger = ledger(8);
        let by_id: HashMap<u64, &InventoryBatch> =
            ledger.batches.iter().map(|b| (b.id, b)).collect();

        assert!(!ledger.returns.is_empty());
        for ret in &ledger.returns {
            let batch = by_id[&ret.batch_id];
            assert_eq!(ret.barcode, batch.barcode);
            assert_eq!(ret.supplier_id, batch.supplier_id);
            assert_eq!(ret.cost_price, batch.cost_price);
            assert_eq!(ret.reference, format!("RET-{}", batch.supplier_ref));

            assert!(ret.quantity_change < 0);
            let returned = -ret.quantity_change;
            assert!(returned >= 1);
            assert!(returned <= (batch.quantity / 2).max(1));

            let delay = (ret.created_date - batch.received_date).num_days();
            assert!((30..=180).contains(&delay), "return delay {delay}");
            assert!(ret.created_date <= date(2024, 12, 31));
        }
    }

    #[test]
    fn return_rate_sits_near_eight_percent() {
        let ledger = ledger(9);
        let rate = ledger.returns.len() as f64 / ledger.batches.len() as f64;
        // Late-year batches lose their return window, so the realized rate
        // runs below the 8% draw.
        assert!((0.03..=0.10).contains(&rate), "return rate {rate}");
    }

    #[test]
    fn same_seed_replays_the_same_ledger() {
        assert_eq!(ledger(42), ledger(42));
        assert_ne!(ledger(42), ledger(43));
    }

    #[test]
    fn empty_supplier_directory_is_rejected() {
        let products = builtin::products().unwrap();
        let inflation = InflationModel::new(0.045, date(2024, 1, 1));
        let result = SupplySimulator::new(&products, &[], inflation);
        assert!(matches!(result, Err(SimError::Validation(_))));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every batch lands inside the run window and expires
            /// after arrival; every return drains stock before the window
            /// closes.
            #[test]
            fn deliveries_stay_inside_the_window(
                seed in 0u64..1_000,
                start_offset in 0u64..365,
                span_days in 30u64..=90
            ) {
                let products = builtin::products().unwrap();
                let suppliers = directory();
                let start = date(2024, 1, 1) + chrono::Days::new(start_offset);
                let end = start + chrono::Days::new(span_days - 1);
                let range = DateSpan::new(start, end).unwrap();
                let inflation = InflationModel::new(0.045, start);

                let sim = SupplySimulator::new(&products, &suppliers, inflation).unwrap();
                let mut rng = StdRng::seed_from_u64(seed);
                let ledger = sim.simulate(range, &mut rng).unwrap();

                for batch in &ledger.batches {
                    prop_assert!(range.contains(batch.received_date));
                    prop_assert!(batch.expiry_date > batch.received_date);
                    prop_assert!(batch.quantity >= 1);
                }
                for ret in &ledger.returns {
                    prop_assert!(ret.quantity_change < 0);
                    prop_assert!(ret.created_date <= range.end());
                    prop_assert!(ret.reference.starts_with("RET-"));
                }
            }
        }
    }
}
