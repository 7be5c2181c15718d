//! Per-product daily velocity simulation.
//!
//! Unlike the transaction generator, this models each product's movement as
//! one aggregate record per day at base prices, with every active event
//! multiplier stacking on top of the seasonal baseline.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

use sarisim_catalog::Product;
use sarisim_core::{Centavos, rng};
use sarisim_demand::{EventCalendar, EventTag, multipliers};

use crate::profile::PaymentMethod;

/// Stream salt for the per-product baseline draws.
const BASE_VELOCITY_SALT: u64 = 0xDA11_5A1E;

/// Baseline units per product per day.
const BASE_VELOCITY: core::ops::RangeInclusive<i64> = 5..=15;

/// One product's aggregate sales for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityRecord<'a> {
    pub date: NaiveDate,
    pub product: &'a Product,
    pub quantity: i64,
    pub payment: PaymentMethod,
    pub event: Option<EventTag>,
    pub seasonality_multiplier: f64,
    pub total_multiplier: f64,
}

impl VelocityRecord<'_> {
    /// Velocity rows are priced at base level; no inflation applies.
    pub fn subtotal(&self) -> Centavos {
        self.product.base_retail() * self.quantity
    }

    pub fn cost_total(&self) -> Centavos {
        self.product.base_cost() * self.quantity
    }

    pub fn profit(&self) -> Centavos {
        self.subtotal() - self.cost_total()
    }

    pub fn is_event(&self) -> bool {
        self.event.is_some()
    }
}

/// Day-by-day velocity generator. Dead stock is skipped outright.
pub struct VelocitySimulator<'a> {
    products: &'a [Product],
    calendar: &'a EventCalendar,
    seed: u64,
}

impl<'a> VelocitySimulator<'a> {
    pub fn new(products: &'a [Product], calendar: &'a EventCalendar, seed: u64) -> Self {
        Self {
            products,
            calendar,
            seed,
        }
    }

    /// One record per sellable product.
    ///
    /// The baseline is drawn from a stream keyed by barcode and day, so the
    /// same product lands the same baseline on the same date in every run;
    /// only the ±2 noise and the payment draw come from the day RNG.
    pub fn simulate_day(&self, date: NaiveDate, rng: &mut impl Rng) -> Vec<VelocityRecord<'a>> {
        self.products
            .iter()
            .filter(|product| !product.is_never_sell())
            .map(|product| self.record_for(product, date, rng))
            .collect()
    }

    fn record_for(
        &self,
        product: &'a Product,
        date: NaiveDate,
        rng: &mut impl Rng,
    ) -> VelocityRecord<'a> {
        let base = self.base_velocity(product, date);

        let seasonality = multipliers::seasonality(date, Some(product.category()));
        let mut total = seasonality * multipliers::day_of_week(date);
        if let Some(campaign) = self.calendar.active_campaign(date, product.brand()) {
            total *= campaign.multiplier;
        }
        if let Some(promo) = self.calendar.active_promo(date, product.barcode()) {
            total *= promo.multiplier;
        }
        if let Some(holiday) = self.calendar.active_holiday(date) {
            total *= holiday.multiplier;
        }

        let quantity = ((base as f64 * total) as i64 + rng.gen_range(-2..=2)).max(1);

        VelocityRecord {
            date,
            product,
            quantity,
            payment: PaymentMethod::sample(rng),
            event: self.calendar.attribute(date, product),
            seasonality_multiplier: seasonality,
            total_multiplier: total,
        }
    }

    fn base_velocity(&self, product: &Product, date: NaiveDate) -> i64 {
        let mut stream = rng::stream(
            self.seed,
            &[
                BASE_VELOCITY_SALT,
                product.barcode().numeric(),
                date.num_days_from_ce() as u64,
            ],
        );
        stream.gen_range(BASE_VELOCITY)
    }
}
