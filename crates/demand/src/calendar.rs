//! Random event calendar: campaigns, promos, and the fixed holiday table.

use chrono::{Datelike, Days, NaiveDate};
use core::ops::RangeInclusive;
use rand::Rng;
use rand::seq::SliceRandom;

use sarisim_catalog::{Barcode, Brand, Product, STORE_NAME};
use sarisim_core::{DateSpan, SimError, SimResult};

use crate::events::{BrandCampaign, EventSource, EventTag, Holiday, StorePromo};

const CAMPAIGN_NAME_PATTERNS: [&str; 6] = [
    "TV Commercial Blitz",
    "Summer Promo",
    "Back to School",
    "Holiday Special",
    "Anniversary Sale",
    "New Product Launch",
];

/// Promo windows run quarterly.
const PROMO_MONTHS: [u32; 4] = [2, 5, 8, 11];

/// Shape of the per-year random events. The two sales generators run
/// different campaign styles over the same promo and holiday machinery.
#[derive(Debug, Clone)]
pub struct CalendarConfig {
    pub campaigns_per_year: usize,
    /// Days added to the campaign start date; the span keeps both endpoints.
    pub campaign_extent_days: RangeInclusive<u64>,
    pub campaign_multiplier: RangeInclusive<f64>,
}

impl CalendarConfig {
    /// Week-long 3x campaigns, as the transaction generator runs them.
    pub fn transactions() -> Self {
        Self {
            campaigns_per_year: 3,
            campaign_extent_days: 7..=7,
            campaign_multiplier: 3.0..=3.0,
        }
    }

    /// 5-10 day campaigns at 2-3x, as the velocity generator runs them.
    pub fn velocity() -> Self {
        Self {
            campaigns_per_year: 3,
            campaign_extent_days: 5..=10,
            campaign_multiplier: 2.0..=3.0,
        }
    }
}

/// All demand events for a simulated date range, generated year by year.
///
/// Events are generated for every calendar year the range touches, so spans
/// can reach past the range end; days outside the range are simply never
/// queried.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCalendar {
    campaigns: Vec<BrandCampaign>,
    promos: Vec<StorePromo>,
    holidays: Vec<Holiday>,
}

impl EventCalendar {
    pub fn generate(
        range: DateSpan,
        products: &[Product],
        campaign_brands: &[Brand],
        config: &CalendarConfig,
        rng: &mut impl Rng,
    ) -> SimResult<Self> {
        if products.is_empty() {
            return Err(SimError::validation("event calendar needs a product catalog"));
        }
        if campaign_brands.is_empty() {
            return Err(SimError::validation("event calendar needs campaign brands"));
        }

        let mut campaigns = Vec::new();
        let mut promos = Vec::new();
        let mut holidays = Vec::new();
        for year in range.start().year()..=range.end().year() {
            campaigns.extend(generate_campaigns(year, campaign_brands, config, rng)?);
            promos.extend(generate_promos(year, products, rng)?);
            holidays.extend(holidays_for(year)?);
        }

        Ok(Self {
            campaigns,
            promos,
            holidays,
        })
    }

    pub fn campaigns(&self) -> &[BrandCampaign] {
        &self.campaigns
    }

    pub fn promos(&self) -> &[StorePromo] {
        &self.promos
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// First campaign covering `date` for `brand`, if any.
    pub fn active_campaign(&self, date: NaiveDate, brand: &Brand) -> Option<&BrandCampaign> {
        self.campaigns
            .iter()
            .find(|c| c.applies_to(brand) && c.span.contains(date))
    }

    /// First promo covering `date` that names `barcode`, if any.
    pub fn active_promo(&self, date: NaiveDate, barcode: &Barcode) -> Option<&StorePromo> {
        self.promos
            .iter()
            .find(|p| p.applies_to(barcode) && p.span.contains(date))
    }

    /// First holiday covering `date`, if any.
    pub fn active_holiday(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.span.contains(date))
    }

    /// Attribution for a sale of `product` on `date`: campaigns beat promos,
    /// promos beat holidays.
    pub fn attribute(&self, date: NaiveDate, product: &Product) -> Option<EventTag> {
        if let Some(campaign) = self.active_campaign(date, product.brand()) {
            return Some(EventTag {
                source: EventSource::ManufacturerCampaign,
                name: campaign.name.clone(),
            });
        }
        if let Some(promo) = self.active_promo(date, product.barcode()) {
            return Some(EventTag {
                source: EventSource::StoreDiscount,
                name: promo.name.clone(),
            });
        }
        self.active_holiday(date).map(|holiday| EventTag {
            source: EventSource::Holiday,
            name: holiday.name.clone(),
        })
    }
}

fn ymd(year: i32, month: u32, day: u32) -> SimResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SimError::invariant(format!("invalid date {year}-{month:02}-{day:02}")))
}

fn generate_campaigns(
    year: i32,
    brands: &[Brand],
    config: &CalendarConfig,
    rng: &mut impl Rng,
) -> SimResult<Vec<BrandCampaign>> {
    let mut campaigns = Vec::with_capacity(config.campaigns_per_year);
    let mut used_months: Vec<u32> = Vec::new();

    for _ in 0..config.campaigns_per_year {
        let brand = &brands[rng.gen_range(0..brands.len())];

        // One campaign per month at most.
        let available: Vec<u32> = (1..=12).filter(|m| !used_months.contains(m)).collect();
        let Some(&month) = available.choose(rng) else {
            break;
        };
        used_months.push(month);

        let start = ymd(year, month, rng.gen_range(1..=21))?;
        let extent = rng.gen_range(config.campaign_extent_days.clone());
        let span = DateSpan::new(start, start + Days::new(extent))?;

        let pattern = CAMPAIGN_NAME_PATTERNS[rng.gen_range(0..CAMPAIGN_NAME_PATTERNS.len())];
        campaigns.push(BrandCampaign {
            name: format!("{brand} {pattern}"),
            brand: brand.clone(),
            span,
            multiplier: rng.gen_range(config.campaign_multiplier.clone()),
        });
    }

    Ok(campaigns)
}

fn generate_promos(
    year: i32,
    products: &[Product],
    rng: &mut impl Rng,
) -> SimResult<Vec<StorePromo>> {
    let mut promos = Vec::with_capacity(PROMO_MONTHS.len());

    for month in PROMO_MONTHS {
        let count = rng.gen_range(3..=6usize).min(products.len());
        let barcodes: Vec<Barcode> = products
            .choose_multiple(rng, count)
            .map(|p| p.barcode().clone())
            .collect();

        let start = ymd(year, month, rng.gen_range(1..=15))?;
        let span = DateSpan::new(start, start + Days::new(rng.gen_range(7..=14)))?;

        promos.push(StorePromo {
            name: format!("{STORE_NAME} {} Sale", start.format("%B")),
            barcodes,
            span,
            multiplier: rng.gen_range(1.5..=2.2),
        });
    }

    Ok(promos)
}

/// Philippine holiday table. A duration of `d` days covers `d + 1` calendar
/// days because spans keep both endpoints.
fn holidays_for(year: i32) -> SimResult<Vec<Holiday>> {
    let entries: [(&str, u32, u32, u64, f64); 10] = [
        ("New Year's Day", 1, 1, 2, 1.6),
        ("Valentine's Day", 2, 14, 2, 1.4),
        ("Holy Week", 3, 28, 4, 1.5),
        ("Labor Day", 5, 1, 1, 1.3),
        ("Independence Day", 6, 12, 1, 1.3),
        ("All Saints Day", 11, 1, 2, 1.4),
        ("Bonifacio Day", 11, 30, 1, 1.3),
        ("Christmas Eve", 12, 24, 2, 2.0),
        ("Christmas Day", 12, 25, 2, 1.8),
        ("New Year's Eve", 12, 31, 1, 1.9),
    ];

    entries
        .into_iter()
        .map(|(name, month, day, duration, multiplier)| {
            let start = ymd(year, month, day)?;
            Ok(Holiday {
                name: name.to_string(),
                span: DateSpan::new(start, start + Days::new(duration))?,
                multiplier,
            })
        })
        .collect()
}
