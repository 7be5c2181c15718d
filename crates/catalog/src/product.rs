use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use sarisim_core::{Centavos, SimError, SimResult};

/// Retail barcode: 1 to 14 ASCII digits, leading zeros preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Barcode(String);

impl Barcode {
    pub const MAX_DIGITS: usize = 14;

    pub fn new(digits: impl Into<String>) -> SimResult<Self> {
        let digits = digits.into();
        if digits.is_empty() || digits.len() > Self::MAX_DIGITS {
            return Err(SimError::validation(format!(
                "barcode must be 1-{} digits, got {:?}",
                Self::MAX_DIGITS,
                digits
            )));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SimError::validation(format!(
                "barcode must be numeric, got {digits:?}"
            )));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits as an integer, for seeding per-product random streams. Leading
    /// zeros collapse, which is fine for a salt.
    pub fn numeric(&self) -> u64 {
        // Construction guarantees <= 14 digits, which always fits u64.
        self.0.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Barcode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Barcode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Barcode::new(s).map_err(serde::de::Error::custom)
    }
}

/// Brand label as printed on the packaging. Manufacturer campaigns key on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brand(String);

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shelf category. Serialized in the uppercase form the exports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Soda,
    SoftdrinksCase,
    Beverages,
    Snack,
    CannedGoods,
    Dairy,
    Condiments,
    PersonalCare,
    Household,
    InstantNoodles,
    DeadStock,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Soda => "SODA",
            Category::SoftdrinksCase => "SOFTDRINKS_CASE",
            Category::Beverages => "BEVERAGES",
            Category::Snack => "SNACK",
            Category::CannedGoods => "CANNED_GOODS",
            Category::Dairy => "DAIRY",
            Category::Condiments => "CONDIMENTS",
            Category::PersonalCare => "PERSONAL_CARE",
            Category::Household => "HOUSEHOLD",
            Category::InstantNoodles => "INSTANT_NOODLES",
            Category::DeadStock => "DEAD_STOCK",
        }
    }

    /// Categories lifted by the summer (Apr-May) seasonality bump.
    pub fn is_beverage(self) -> bool {
        matches!(
            self,
            Category::Beverages | Category::Soda | Category::SoftdrinksCase
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for one stocked product.
///
/// Base prices are the price level at the inflation anchor date; generators
/// apply the inflation factor per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    barcode: Barcode,
    name: String,
    brand: Brand,
    category: Category,
    base_retail: Centavos,
    base_cost: Centavos,
    wholesale_only: bool,
    never_sell: bool,
    hero_weight: u32,
}

impl Product {
    pub fn new(
        barcode: Barcode,
        name: impl Into<String>,
        brand: Brand,
        category: Category,
        base_retail: Centavos,
        base_cost: Centavos,
    ) -> SimResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SimError::validation("product name cannot be empty"));
        }
        if base_retail <= Centavos::ZERO || base_cost <= Centavos::ZERO {
            return Err(SimError::validation(format!(
                "product {barcode} needs positive prices"
            )));
        }
        Ok(Self {
            barcode,
            name,
            brand,
            category,
            base_retail,
            base_cost,
            wholesale_only: false,
            never_sell: false,
            hero_weight: 1,
        })
    }

    /// Mark as case/bundle stock sold only to vendor customers.
    pub fn wholesale_only(mut self) -> Self {
        self.wholesale_only = true;
        self
    }

    /// Mark as dead stock: listed in the catalog, never sold.
    pub fn never_sell(mut self) -> Self {
        self.never_sell = true;
        self
    }

    /// Selection weight for a hero product; 1 is the baseline.
    pub fn hero(mut self, weight: u32) -> Self {
        self.hero_weight = weight.max(1);
        self
    }

    pub fn barcode(&self) -> &Barcode {
        &self.barcode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &Brand {
        &self.brand
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn base_retail(&self) -> Centavos {
        self.base_retail
    }

    pub fn base_cost(&self) -> Centavos {
        self.base_cost
    }

    pub fn is_wholesale_only(&self) -> bool {
        self.wholesale_only
    }

    pub fn is_never_sell(&self) -> bool {
        self.never_sell
    }

    pub fn hero_weight(&self) -> u32 {
        self.hero_weight
    }
}
