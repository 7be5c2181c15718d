//! Peso amounts as integer centavos.
//!
//! All prices and totals are carried in the smallest currency unit so that
//! sums stay exact; floats appear only transiently when a multiplier or
//! inflation factor is applied, and are rounded straight back.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{SimError, SimResult};

/// Peso amount in centavos (1/100 PHP).
///
/// Signed: stock-movement rows for supplier returns carry negative amounts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Centavos(i64);

impl Centavos {
    pub const ZERO: Centavos = Centavos(0);

    /// Amount from raw centavos.
    pub const fn new(centavos: i64) -> Self {
        Self(centavos)
    }

    /// Amount from whole pesos.
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// Amount as a float in pesos. For ratios and report math only.
    pub fn to_pesos(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by a float factor, rounding half away from zero to the
    /// nearest centavo.
    pub fn scale(self, factor: f64) -> Centavos {
        Centavos((self.0 as f64 * factor).round() as i64)
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Centavos {
    type Output = Centavos;

    fn add(self, rhs: Centavos) -> Centavos {
        Centavos(self.0 + rhs.0)
    }
}

impl AddAssign for Centavos {
    fn add_assign(&mut self, rhs: Centavos) {
        self.0 += rhs.0;
    }
}

impl Sub for Centavos {
    type Output = Centavos;

    fn sub(self, rhs: Centavos) -> Centavos {
        Centavos(self.0 - rhs.0)
    }
}

impl SubAssign for Centavos {
    fn sub_assign(&mut self, rhs: Centavos) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Centavos {
    type Output = Centavos;

    fn mul(self, rhs: i64) -> Centavos {
        Centavos(self.0 * rhs)
    }
}

impl Neg for Centavos {
    type Output = Centavos;

    fn neg(self) -> Centavos {
        Centavos(-self.0)
    }
}

impl Sum for Centavos {
    fn sum<I: Iterator<Item = Centavos>>(iter: I) -> Centavos {
        iter.fold(Centavos::ZERO, Add::add)
    }
}

impl fmt::Display for Centavos {
    /// Two-decimal peso rendering, e.g. `25.00` or `-3.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Centavos {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, rest) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let (whole, frac) = match rest.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (rest, ""),
        };
        let pesos = parse_digits(whole, s)?;
        let centavos = match frac.len() {
            0 => 0,
            1 => parse_digits(frac, s)? * 10,
            2 => parse_digits(frac, s)?,
            _ => return Err(SimError::parse(format!("too many decimals in amount {s:?}"))),
        };
        Ok(Centavos(sign * (pesos * 100 + centavos)))
    }
}

fn parse_digits(digits: &str, original: &str) -> SimResult<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SimError::parse(format!("malformed amount {original:?}")));
    }
    digits
        .parse()
        .map_err(|_| SimError::parse(format!("amount out of range {original:?}")))
}

impl Serialize for Centavos {
    /// Serialized as the two-decimal string; the CSV exports depend on it.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Centavos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_two_decimals() {
        assert_eq!(Centavos::from_pesos(25).to_string(), "25.00");
        assert_eq!(Centavos::new(1550).to_string(), "15.50");
        assert_eq!(Centavos::new(5).to_string(), "0.05");
        assert_eq!(Centavos::ZERO.to_string(), "0.00");
    }

    #[test]
    fn display_renders_negative_amounts() {
        assert_eq!(Centavos::new(-350).to_string(), "-3.50");
        assert_eq!(Centavos::new(-5).to_string(), "-0.05");
    }

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("25".parse::<Centavos>().unwrap(), Centavos::from_pesos(25));
        assert_eq!("25.5".parse::<Centavos>().unwrap(), Centavos::new(2550));
        assert_eq!("25.50".parse::<Centavos>().unwrap(), Centavos::new(2550));
        assert_eq!("-3.50".parse::<Centavos>().unwrap(), Centavos::new(-350));
        assert_eq!("0.05".parse::<Centavos>().unwrap(), Centavos::new(5));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for bad in ["", "-", ".", "1.234", "12.", "abc", "1,000", "1.2.3", "++1"] {
            let err = bad.parse::<Centavos>().unwrap_err();
            assert!(
                matches!(err, SimError::Parse(_)),
                "expected parse error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn scale_rounds_half_away_from_zero() {
        // 10.00 * 1.0005 = 10.005 -> 10.01
        assert_eq!(Centavos::new(1000).scale(1.0005), Centavos::new(1001));
        assert_eq!(Centavos::new(1000).scale(0.5), Centavos::new(500));
        assert_eq!(Centavos::new(-1000).scale(1.0005), Centavos::new(-1001));
    }

    #[test]
    fn scale_by_one_is_identity() {
        for raw in [-123_456, -1, 0, 1, 99, 2550, 8_250_000] {
            let amount = Centavos::new(raw);
            assert_eq!(amount.scale(1.0), amount);
        }
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = Centavos::new(1995);
        let b = Centavos::new(5);
        assert_eq!(a + b, Centavos::from_pesos(20));
        assert_eq!(a - b, Centavos::new(1990));
        assert_eq!(b * 3, Centavos::new(15));
        assert_eq!(-b, Centavos::new(-5));

        let total: Centavos = [a, b, b].into_iter().sum();
        assert_eq!(total, Centavos::new(2005));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: Display output round-trips through FromStr.
            #[test]
            fn display_round_trips(raw in -1_000_000_000i64..1_000_000_000i64) {
                let amount = Centavos::new(raw);
                let parsed: Centavos = amount.to_string().parse().unwrap();
                prop_assert_eq!(parsed, amount);
            }

            /// Property: scaling by a factor near 1 moves the amount by at
            /// most factor + half a centavo.
            #[test]
            fn scale_stays_within_rounding_error(
                raw in 0i64..100_000_000i64,
                factor in 0.5f64..2.0f64
            ) {
                let scaled = Centavos::new(raw).scale(factor);
                let exact = raw as f64 * factor;
                prop_assert!((scaled.centavos() as f64 - exact).abs() <= 0.5);
            }

            /// Property: addition agrees with raw centavo arithmetic.
            #[test]
            fn addition_matches_raw_centavos(
                a in -1_000_000_000i64..1_000_000_000i64,
                b in -1_000_000_000i64..1_000_000_000i64
            ) {
                let sum = Centavos::new(a) + Centavos::new(b);
                prop_assert_eq!(sum.centavos(), a + b);
            }
        }
    }
}
