//! Environment-driven run configuration.
//!
//! The binaries take no arguments; everything comes from `SARISIM_*`
//! variables with logged fallbacks. Unset is fine, malformed is not.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use rand::Rng;

use sarisim_core::{DateSpan, InflationModel};

/// Annual price-inflation rate shared by every generator.
pub const ANNUAL_INFLATION_RATE: f64 = 0.045;

const DEFAULT_START: &str = "2024-01-01";

/// Everything a generator binary needs for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub range: DateSpan,
    pub seed: u64,
    pub out_dir: PathBuf,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        let start = match env::var("SARISIM_START_DATE") {
            Ok(value) => parse_date(&value).context("SARISIM_START_DATE")?,
            Err(_) => {
                tracing::warn!("SARISIM_START_DATE not set; starting {DEFAULT_START}");
                parse_date(DEFAULT_START)?
            }
        };

        let end = match env::var("SARISIM_END_DATE") {
            Ok(value) => parse_date(&value).context("SARISIM_END_DATE")?,
            Err(_) => {
                let today = Utc::now().date_naive();
                tracing::warn!("SARISIM_END_DATE not set; running through today ({today})");
                today
            }
        };

        let range = DateSpan::new(start, end).context("SARISIM_START_DATE/SARISIM_END_DATE")?;

        let seed = match env::var("SARISIM_SEED") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("SARISIM_SEED must be a u64, got {value:?}"))?,
            Err(_) => {
                let drawn: u64 = rand::thread_rng().r#gen();
                tracing::warn!(seed = drawn, "SARISIM_SEED not set; drew one for this run");
                drawn
            }
        };

        let out_dir = env::var_os("SARISIM_OUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            range,
            seed,
            out_dir,
        })
    }

    /// Inflation model anchored at the run's start date.
    pub fn inflation(&self) -> InflationModel {
        InflationModel::new(ANNUAL_INFLATION_RATE, self.range.start())
    }

    pub fn out_path(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.out_dir.join(file_name)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("expected a YYYY-MM-DD date, got {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_dates() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            parse_date("2025-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn rejects_non_iso_dates() {
        for bad in ["01/01/2024", "2024-13-01", "yesterday", ""] {
            assert!(parse_date(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn default_start_parses() {
        assert!(parse_date(DEFAULT_START).is_ok());
    }

    #[test]
    fn inflation_anchors_at_the_range_start() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let config = RunConfig {
            range: DateSpan::new(start, end).unwrap(),
            seed: 1,
            out_dir: PathBuf::from("."),
        };
        assert_eq!(config.inflation().factor(start), 1.0);
    }
}
