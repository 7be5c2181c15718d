//! Customer profiles and their shopping parameters.

use core::fmt;
use core::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use sarisim_core::Centavos;

/// The three customer archetypes the store serves, drawn 70/20/10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerProfile {
    Snacker,
    Household,
    Vendor,
}

impl CustomerProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snacker => "SNACKER",
            Self::Household => "HOUSEHOLD",
            Self::Vendor => "VENDOR",
        }
    }

    /// Weighted draw: 70% snackers, 20% households, 10% vendors.
    pub fn sample(rng: &mut impl Rng) -> Self {
        let roll: f64 = rng.r#gen();
        if roll < 0.70 {
            Self::Snacker
        } else if roll < 0.90 {
            Self::Household
        } else {
            Self::Vendor
        }
    }

    pub fn params(&self) -> ProfileParams {
        match self {
            Self::Snacker => ProfileParams {
                distinct_items: 1..=2,
                ticket_min: Centavos::from_pesos(15),
                ticket_max: Centavos::from_pesos(150),
                quantity: 1..=1,
            },
            Self::Household => ProfileParams {
                distinct_items: 3..=8,
                ticket_min: Centavos::from_pesos(300),
                ticket_max: Centavos::from_pesos(1_500),
                quantity: 1..=2,
            },
            Self::Vendor => ProfileParams {
                distinct_items: 5..=15,
                ticket_min: Centavos::from_pesos(1_500),
                ticket_max: Centavos::from_pesos(8_000),
                quantity: 3..=12,
            },
        }
    }
}

impl fmt::Display for CustomerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shopping parameters for one profile. Ticket bounds are in base-date pesos
/// and get inflated to the transaction date before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileParams {
    pub distinct_items: RangeInclusive<usize>,
    pub ticket_min: Centavos,
    pub ticket_max: Centavos,
    pub quantity: RangeInclusive<i64>,
}

/// How the customer settles the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Gcash,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Gcash => "GCASH",
        }
    }

    /// Baseline split: 70% cash, 30% GCash.
    pub fn sample(rng: &mut impl Rng) -> Self {
        if rng.r#gen::<f64>() < 0.7 {
            Self::Cash
        } else {
            Self::Gcash
        }
    }

    /// Profile-adjusted split; snackers pay cash 80% of the time.
    pub fn sample_for(profile: CustomerProfile, rng: &mut impl Rng) -> Self {
        let cash_share = match profile {
            CustomerProfile::Snacker => 0.8,
            _ => 0.7,
        };
        if rng.r#gen::<f64>() < cash_share {
            Self::Cash
        } else {
            Self::Gcash
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn names_are_screaming_snake_case() {
        assert_eq!(CustomerProfile::Snacker.as_str(), "SNACKER");
        assert_eq!(CustomerProfile::Household.as_str(), "HOUSEHOLD");
        assert_eq!(CustomerProfile::Vendor.as_str(), "VENDOR");
        assert_eq!(PaymentMethod::Cash.as_str(), "CASH");
        assert_eq!(PaymentMethod::Gcash.as_str(), "GCASH");
    }

    #[test]
    fn params_scale_up_with_the_profile() {
        let snacker = CustomerProfile::Snacker.params();
        let household = CustomerProfile::Household.params();
        let vendor = CustomerProfile::Vendor.params();

        assert!(snacker.ticket_max < household.ticket_min);
        assert!(household.ticket_max <= vendor.ticket_min);
        assert_eq!(snacker.quantity, 1..=1);
        assert_eq!(vendor.distinct_items, 5..=15);
    }

    #[test]
    fn profile_draw_matches_the_weighting() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            match CustomerProfile::sample(&mut rng) {
                CustomerProfile::Snacker => counts[0] += 1,
                CustomerProfile::Household => counts[1] += 1,
                CustomerProfile::Vendor => counts[2] += 1,
            }
        }
        assert!((6_600..=7_400).contains(&counts[0]), "snackers: {}", counts[0]);
        assert!((1_600..=2_400).contains(&counts[1]), "households: {}", counts[1]);
        assert!((700..=1_300).contains(&counts[2]), "vendors: {}", counts[2]);
    }

    #[test]
    fn snackers_prefer_cash_more_than_vendors() {
        let mut rng = StdRng::seed_from_u64(7);
        let snacker_cash = (0..10_000)
            .filter(|_| {
                PaymentMethod::sample_for(CustomerProfile::Snacker, &mut rng) == PaymentMethod::Cash
            })
            .count();
        let vendor_cash = (0..10_000)
            .filter(|_| {
                PaymentMethod::sample_for(CustomerProfile::Vendor, &mut rng) == PaymentMethod::Cash
            })
            .count();

        assert!((7_600..=8_400).contains(&snacker_cash), "snacker cash: {snacker_cash}");
        assert!((6_600..=7_400).contains(&vendor_cash), "vendor cash: {vendor_cash}");
    }
}
