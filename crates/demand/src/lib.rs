//! Demand shaping: deterministic multiplier tables and the per-year
//! random event calendar that drives them above baseline.

pub mod calendar;
pub mod events;
pub mod multipliers;

pub use calendar::{CalendarConfig, EventCalendar};
pub use events::{BrandCampaign, EventSource, EventTag, Holiday, StorePromo};
