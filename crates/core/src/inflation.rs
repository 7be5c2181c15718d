//! Linear price drift against a fixed anchor date.

use chrono::NaiveDate;

use crate::money::Centavos;

/// Average Gregorian year length; keeps the drift smooth across leap years.
const DAYS_PER_YEAR: f64 = 365.25;

/// Linear inflation: the price factor grows by `annual_rate` per elapsed
/// year, anchored at 1.0 on the anchor date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InflationModel {
    annual_rate: f64,
    anchor: NaiveDate,
}

impl InflationModel {
    pub fn new(annual_rate: f64, anchor: NaiveDate) -> Self {
        Self { annual_rate, anchor }
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Price factor at `date`. Exactly 1.0 on the anchor date; dates before
    /// the anchor deflate.
    pub fn factor(&self, date: NaiveDate) -> f64 {
        let elapsed_days = (date - self.anchor).num_days() as f64;
        1.0 + self.annual_rate * (elapsed_days / DAYS_PER_YEAR)
    }

    /// `amount` at the price level of `date`, rounded to the centavo.
    pub fn adjust(&self, amount: Centavos, date: NaiveDate) -> Centavos {
        amount.scale(self.factor(date))
    }
}
