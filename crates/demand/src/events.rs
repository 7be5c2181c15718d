use serde::{Deserialize, Serialize};

use sarisim_catalog::{Barcode, Brand};
use sarisim_core::DateSpan;

/// Attribution tag carried on sales rows and the events log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSource {
    StoreDiscount,
    ManufacturerCampaign,
    Holiday,
}

impl EventSource {
    pub fn as_str(self) -> &'static str {
        match self {
            EventSource::StoreDiscount => "STORE_DISCOUNT",
            EventSource::ManufacturerCampaign => "MANUFACTURER_CAMPAIGN",
            EventSource::Holiday => "HOLIDAY",
        }
    }
}

/// Resolved attribution for one sale: the event a row gets booked under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTag {
    pub source: EventSource,
    pub name: String,
}

/// Manufacturer advertising campaign lifting every product of one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandCampaign {
    pub name: String,
    pub brand: Brand,
    pub span: DateSpan,
    pub multiplier: f64,
}

impl BrandCampaign {
    pub fn applies_to(&self, brand: &Brand) -> bool {
        &self.brand == brand
    }
}

/// Store-initiated discount period on a set of specific products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePromo {
    pub name: String,
    pub barcodes: Vec<Barcode>,
    pub span: DateSpan,
    pub multiplier: f64,
}

impl StorePromo {
    pub fn applies_to(&self, barcode: &Barcode) -> bool {
        self.barcodes.contains(barcode)
    }
}

/// Holiday period lifting the whole store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub span: DateSpan,
    pub multiplier: f64,
}
