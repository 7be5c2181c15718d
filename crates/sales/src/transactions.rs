//! Transaction-count-driven daily simulation of customer visits.

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use sarisim_catalog::Product;
use sarisim_core::{Centavos, InflationModel, SimError, SimResult};
use sarisim_demand::{EventCalendar, EventTag, multipliers};

use crate::basket::{self, BasketLine, PricedCatalog};
use crate::profile::{CustomerProfile, PaymentMethod};

/// Baseline customer visits per day before multipliers.
const BASE_DAILY_TRANSACTIONS: f64 = 110.0;

/// Floor after all multipliers, even on the slowest Tuesday.
const MIN_DAILY_TRANSACTIONS: i64 = 50;

/// Business hours with relative foot traffic. Light mornings, a lunch peak,
/// and an after-work rush before the 7pm close.
const HOUR_WEIGHTS: [(u32, f64); 11] = [
    (8, 0.5),
    (9, 0.7),
    (10, 0.9),
    (11, 1.2),
    (12, 1.5),
    (13, 1.3),
    (14, 1.0),
    (15, 1.1),
    (16, 1.2),
    (17, 1.4),
    (18, 1.3),
];

/// One product line within a transaction, priced at the transaction date.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionLine<'a> {
    pub product: &'a Product,
    pub quantity: i64,
    pub unit_price: Centavos,
    pub unit_cost: Centavos,
    pub event: Option<EventTag>,
}

impl TransactionLine<'_> {
    pub fn subtotal(&self) -> Centavos {
        self.unit_price * self.quantity
    }

    pub fn cost_total(&self) -> Centavos {
        self.unit_cost * self.quantity
    }

    pub fn profit(&self) -> Centavos {
        self.subtotal() - self.cost_total()
    }

    pub fn is_event(&self) -> bool {
        self.event.is_some()
    }
}

/// One customer visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction<'a> {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub profile: CustomerProfile,
    pub payment: PaymentMethod,
    pub inflation_factor: f64,
    pub lines: Vec<TransactionLine<'a>>,
}

impl Transaction<'_> {
    pub fn total(&self) -> Centavos {
        self.lines.iter().map(TransactionLine::subtotal).sum()
    }

    pub fn cost_total(&self) -> Centavos {
        self.lines.iter().map(TransactionLine::cost_total).sum()
    }

    pub fn profit(&self) -> Centavos {
        self.total() - self.cost_total()
    }

    pub fn units(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

/// Day-by-day transaction generator over a fixed catalog and calendar.
pub struct TransactionSimulator<'a> {
    products: &'a [Product],
    calendar: &'a EventCalendar,
    inflation: InflationModel,
    hour_dist: WeightedIndex<f64>,
}

impl<'a> TransactionSimulator<'a> {
    pub fn new(
        products: &'a [Product],
        calendar: &'a EventCalendar,
        inflation: InflationModel,
    ) -> SimResult<Self> {
        if products.iter().all(Product::is_never_sell) {
            return Err(SimError::validation("catalog has no sellable products"));
        }
        let hour_dist = WeightedIndex::new(HOUR_WEIGHTS.iter().map(|(_, weight)| *weight))
            .map_err(|err| SimError::invariant(format!("hour weights: {err}")))?;
        Ok(Self {
            products,
            calendar,
            inflation,
            hour_dist,
        })
    }

    /// All transactions for one day.
    ///
    /// Transaction ids are `TX-YYYYMMDD-NNNN` with the counter starting at 1
    /// each day. A customer whose basket comes back empty still consumes a
    /// counter value, so id sequences may have gaps.
    pub fn simulate_day(
        &self,
        date: NaiveDate,
        rng: &mut impl Rng,
    ) -> SimResult<Vec<Transaction<'a>>> {
        let priced = PricedCatalog::at(self.products, &self.inflation, date);
        let target = self.daily_target(date, rng);
        let id_base = date.format("%Y%m%d").to_string();

        let mut transactions = Vec::with_capacity(target as usize);
        for counter in 1..=target {
            let profile = CustomerProfile::sample(rng);
            let lines = basket::build_basket(&priced, profile, self.calendar, rng);
            if lines.is_empty() {
                continue;
            }

            let time = self.sample_time(rng)?;
            let payment = PaymentMethod::sample_for(profile, rng);
            let lines = lines
                .into_iter()
                .map(|line| self.tag_line(date, line))
                .collect();

            transactions.push(Transaction {
                id: format!("TX-{id_base}-{counter:04}"),
                date,
                time,
                profile,
                payment,
                inflation_factor: priced.inflation_factor(),
                lines,
            });
        }
        Ok(transactions)
    }

    /// Visit count for `date`: the baseline scaled by seasonality, day of
    /// week, holiday, payday, and ±15% noise, floored at the daily minimum.
    fn daily_target(&self, date: NaiveDate, rng: &mut impl Rng) -> i64 {
        let holiday = self
            .calendar
            .active_holiday(date)
            .map_or(1.0, |h| h.multiplier);
        let expected = BASE_DAILY_TRANSACTIONS
            * multipliers::seasonality(date, None)
            * multipliers::day_of_week(date)
            * holiday
            * multipliers::payday(date)
            * rng.gen_range(0.85..=1.15);
        (expected as i64).max(MIN_DAILY_TRANSACTIONS)
    }

    fn sample_time(&self, rng: &mut impl Rng) -> SimResult<NaiveTime> {
        let (hour, _) = HOUR_WEIGHTS[self.hour_dist.sample(rng)];
        NaiveTime::from_hms_opt(hour, rng.gen_range(0..60), rng.gen_range(0..60))
            .ok_or_else(|| SimError::invariant("transaction time out of range"))
    }

    fn tag_line(&self, date: NaiveDate, line: BasketLine<'a>) -> TransactionLine<'a> {
        TransactionLine {
            event: self.calendar.attribute(date, line.product),
            product: line.product,
            quantity: line.quantity,
            unit_price: line.unit_price,
            unit_cost: line.unit_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sarisim_catalog::builtin;
    use sarisim_core::DateSpan;
    use sarisim_demand::{CalendarConfig, EventSource};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Fixture {
        products: Vec<Product>,
        calendar: EventCalendar,
        inflation: InflationModel,
    }

    fn fixture() -> Fixture {
        let products = builtin::products().unwrap();
        let span = DateSpan::new(date(2024, 1, 1), date(2025, 12, 31)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let calendar = EventCalendar::generate(
            span,
            &products,
            &builtin::campaign_brands(),
            &CalendarConfig::transactions(),
            &mut rng,
        )
        .unwrap();
        Fixture {
            products,
            calendar,
            inflation: InflationModel::new(0.045, date(2024, 1, 1)),
        }
    }

    fn simulate(fix: &Fixture, day: NaiveDate, seed: u64) -> Vec<Transaction<'_>> {
        let sim = TransactionSimulator::new(&fix.products, &fix.calendar, fix.inflation).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        sim.simulate_day(day, &mut rng).unwrap()
    }

    #[test]
    fn day_meets_the_minimum_transaction_count() {
        let fix = fixture();
        // A plain Tuesday with no multipliers in sight.
        let txs = simulate(&fix, date(2024, 6, 4), 1);
        assert!(txs.len() >= 50, "got {} transactions", txs.len());
    }

    #[test]
    fn ids_are_day_scoped_and_unique() {
        let fix = fixture();
        let txs = simulate(&fix, date(2024, 6, 4), 2);

        let mut ids: Vec<&str> = txs.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), txs.len());

        for tx in &txs {
            assert!(tx.id.starts_with("TX-20240604-"), "bad id {}", tx.id);
            assert_eq!(tx.id.len(), "TX-20240604-0001".len());
        }
    }

    #[test]
    fn totals_equal_the_sum_of_line_subtotals() {
        let fix = fixture();
        for tx in simulate(&fix, date(2024, 12, 20), 3) {
            let expected: Centavos = tx.lines.iter().map(|l| l.unit_price * l.quantity).sum();
            assert_eq!(tx.total(), expected);
            assert_eq!(tx.profit(), tx.total() - tx.cost_total());
        }
    }

    #[test]
    fn lines_carry_prices_inflated_to_the_day() {
        let fix = fixture();
        let day = date(2025, 8, 1);
        let factor = fix.inflation.factor(day);
        for tx in simulate(&fix, day, 4) {
            assert_eq!(tx.inflation_factor, factor);
            for line in &tx.lines {
                assert_eq!(line.unit_price, line.product.base_retail().scale(factor));
                assert_eq!(line.unit_cost, line.product.base_cost().scale(factor));
            }
        }
    }

    #[test]
    fn holidays_tag_every_line() {
        let fix = fixture();
        // Christmas Day sits inside both Christmas holiday spans.
        for tx in simulate(&fix, date(2024, 12, 25), 5) {
            for line in &tx.lines {
                assert!(line.is_event(), "untagged line on a holiday");
            }
        }
    }

    #[test]
    fn campaign_lines_outrank_holiday_attribution() {
        let fix = fixture();
        let mut tagged = 0usize;
        for campaign in fix.calendar.campaigns() {
            let day = campaign.span.start();
            for tx in simulate(&fix, day, 6) {
                for line in &tx.lines {
                    if line.product.brand() == &campaign.brand {
                        let tag = line.event.as_ref().unwrap();
                        assert_eq!(tag.source, EventSource::ManufacturerCampaign);
                        assert_eq!(tag.name, campaign.name);
                        tagged += 1;
                    }
                }
            }
        }
        assert!(tagged > 0, "no campaign-brand lines sold on campaign days");
    }

    #[test]
    fn times_stay_inside_business_hours() {
        let fix = fixture();
        for tx in simulate(&fix, date(2024, 3, 9), 7) {
            assert!((8..=18).contains(&tx.time.hour()), "time {}", tx.time);
        }
    }

    #[test]
    fn holiday_days_draw_more_customers() {
        let fix = fixture();
        // Compare Christmas Eve against a plain Tuesday two weeks earlier,
        // averaged over seeds to wash out the ±15% noise.
        let quiet: usize = (0..5)
            .map(|s| simulate(&fix, date(2024, 12, 10), s).len())
            .sum();
        let busy: usize = (0..5)
            .map(|s| simulate(&fix, date(2024, 12, 24), s).len())
            .sum();
        assert!(busy > quiet, "holiday {busy} vs quiet {quiet}");
    }

    #[test]
    fn same_seed_replays_the_same_day() {
        let fix = fixture();
        let a = simulate(&fix, date(2025, 2, 14), 42);
        let b = simulate(&fix, date(2025, 2, 14), 42);
        assert_eq!(a, b);
    }

    #[test]
    fn all_dead_stock_catalog_is_rejected() {
        let fix = fixture();
        let dead: Vec<Product> = fix
            .products
            .iter()
            .filter(|p| p.is_never_sell())
            .cloned()
            .collect();
        let result = TransactionSimulator::new(&dead, &fix.calendar, fix.inflation);
        assert!(matches!(result, Err(SimError::Validation(_))));
    }
}
