//! Basket assembly: profile-weighted product selection under a ticket budget.

use chrono::NaiveDate;
use rand::Rng;

use sarisim_catalog::Product;
use sarisim_core::{Centavos, InflationModel};
use sarisim_demand::EventCalendar;

use crate::profile::CustomerProfile;

/// Price tier caps, applied to the inflated retail price.
const CHEAP_CAP: Centavos = Centavos::from_pesos(30);
const MID_CAP: Centavos = Centavos::from_pesos(80);

/// One distinct product in a basket, priced at the basket date.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine<'a> {
    pub product: &'a Product,
    pub quantity: i64,
    pub unit_price: Centavos,
    pub unit_cost: Centavos,
}

impl BasketLine<'_> {
    pub fn subtotal(&self) -> Centavos {
        self.unit_price * self.quantity
    }

    pub fn cost_total(&self) -> Centavos {
        self.unit_cost * self.quantity
    }

    pub fn profit(&self) -> Centavos {
        self.subtotal() - self.cost_total()
    }
}

#[derive(Debug, Clone, Copy)]
struct PricedProduct<'a> {
    product: &'a Product,
    retail: Centavos,
    cost: Centavos,
}

/// Sellable catalog priced at one date. Dead stock is dropped here, so no
/// selection path below ever sees it.
#[derive(Debug, Clone)]
pub struct PricedCatalog<'a> {
    date: NaiveDate,
    inflation_factor: f64,
    retail: Vec<PricedProduct<'a>>,
    wholesale: Vec<PricedProduct<'a>>,
}

impl<'a> PricedCatalog<'a> {
    pub fn at(products: &'a [Product], inflation: &InflationModel, date: NaiveDate) -> Self {
        let mut retail = Vec::new();
        let mut wholesale = Vec::new();
        for product in products {
            if product.is_never_sell() {
                continue;
            }
            let priced = PricedProduct {
                product,
                retail: inflation.adjust(product.base_retail(), date),
                cost: inflation.adjust(product.base_cost(), date),
            };
            if product.is_wholesale_only() {
                wholesale.push(priced);
            } else {
                retail.push(priced);
            }
        }
        Self {
            date,
            inflation_factor: inflation.factor(date),
            retail,
            wholesale,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn inflation_factor(&self) -> f64 {
        self.inflation_factor
    }

    /// Selection pool for a profile, weighted by repetition.
    ///
    /// Snackers draw cheap items 4:1 over mid-range; households mix all
    /// tiers; vendors draw from the full retail pool plus triple-weighted
    /// wholesale cases. Hero products then gain extra copies for everyone.
    fn pool_for(&self, profile: CustomerProfile) -> Vec<&PricedProduct<'a>> {
        let cheap: Vec<&PricedProduct<'a>> = self
            .retail
            .iter()
            .filter(|p| p.retail <= CHEAP_CAP)
            .collect();
        let mid: Vec<&PricedProduct<'a>> = self
            .retail
            .iter()
            .filter(|p| p.retail > CHEAP_CAP && p.retail <= MID_CAP)
            .collect();
        let expensive: Vec<&PricedProduct<'a>> =
            self.retail.iter().filter(|p| p.retail > MID_CAP).collect();

        let mut pool: Vec<&PricedProduct<'a>> = match profile {
            CustomerProfile::Snacker if !cheap.is_empty() => {
                let mut pool = Vec::with_capacity(cheap.len() * 4 + mid.len());
                for _ in 0..4 {
                    pool.extend(cheap.iter().copied());
                }
                pool.extend(mid);
                pool
            }
            CustomerProfile::Snacker => self.hero_weighted(),
            CustomerProfile::Household => {
                let mut pool = Vec::with_capacity(cheap.len() * 2 + mid.len() * 2 + expensive.len());
                for _ in 0..2 {
                    pool.extend(cheap.iter().copied());
                }
                for _ in 0..2 {
                    pool.extend(mid.iter().copied());
                }
                pool.extend(expensive);
                pool
            }
            CustomerProfile::Vendor => {
                let mut pool = self.hero_weighted();
                for _ in 0..3 {
                    pool.extend(self.wholesale.iter());
                }
                pool
            }
        };

        for priced in &self.retail {
            if priced.product.hero_weight() > 1 {
                for _ in 0..priced.product.hero_weight() {
                    pool.push(priced);
                }
            }
        }

        pool
    }

    /// Full retail pool with each product repeated by its hero weight.
    fn hero_weighted(&self) -> Vec<&PricedProduct<'a>> {
        let mut pool = Vec::new();
        for priced in &self.retail {
            for _ in 0..priced.product.hero_weight().max(1) {
                pool.push(priced);
            }
        }
        pool
    }
}

/// Assemble one basket.
///
/// Draws from the profile pool until the distinct-item count is reached, the
/// budget is exhausted, or the attempt allowance runs out. The ticket budget
/// is the profile cap inflated to the basket date; quantity gets cut to fit
/// remaining headroom for everyone but snackers, who skip over-budget picks.
pub fn build_basket<'a>(
    catalog: &PricedCatalog<'a>,
    profile: CustomerProfile,
    calendar: &EventCalendar,
    rng: &mut impl Rng,
) -> Vec<BasketLine<'a>> {
    let params = profile.params();
    let target_max = params.ticket_max.scale(catalog.inflation_factor());
    let num_items = rng.gen_range(params.distinct_items.clone());

    let pool = catalog.pool_for(profile);
    if pool.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<BasketLine<'a>> = Vec::with_capacity(num_items);
    let mut current_total = Centavos::ZERO;

    let max_attempts = num_items * 5;
    for _ in 0..max_attempts {
        if lines.len() >= num_items {
            break;
        }

        let pick = pool[rng.gen_range(0..pool.len())];

        let mut quantity = if pick.product.is_wholesale_only() {
            // Cases and bundles move one to three at a time.
            rng.gen_range(1..=3)
        } else {
            rng.gen_range(params.quantity.clone())
        };

        let promoted = calendar
            .active_campaign(catalog.date(), pick.product.brand())
            .is_some()
            || calendar
                .active_promo(catalog.date(), pick.product.barcode())
                .is_some();
        if promoted && profile != CustomerProfile::Snacker {
            quantity = (quantity + 1).min(*params.quantity.end() + 2);
        }

        let mut item_total = pick.retail * quantity;
        if current_total + item_total > target_max {
            if profile == CustomerProfile::Snacker {
                continue;
            }
            // Shrink to remaining headroom; a single unit may still overshoot.
            let headroom = target_max - current_total;
            quantity = (headroom.centavos() / pick.retail.centavos()).max(1);
            item_total = pick.retail * quantity;
        }

        if lines
            .iter()
            .any(|line| line.product.barcode() == pick.product.barcode())
        {
            continue;
        }

        lines.push(BasketLine {
            product: pick.product,
            quantity,
            unit_price: pick.retail,
            unit_cost: pick.cost,
        });
        current_total += item_total;

        if current_total >= target_max {
            break;
        }
    }

    lines
}
