//! Logging helpers shared by the generator binaries.

use std::collections::BTreeSet;

use chrono::Datelike;

use sarisim_demand::EventCalendar;

/// Simulated days between progress log lines.
pub const PROGRESS_EVERY_DAYS: usize = 60;

/// Log a per-year summary of the generated event calendar.
pub fn log_calendar(calendar: &EventCalendar) {
    let years: BTreeSet<i32> = calendar
        .campaigns()
        .iter()
        .map(|c| c.span.start().year())
        .chain(calendar.promos().iter().map(|p| p.span.start().year()))
        .chain(calendar.holidays().iter().map(|h| h.span.start().year()))
        .collect();

    for year in years {
        let campaigns = count_in(year, calendar.campaigns().iter().map(|c| c.span.start()));
        let promos = count_in(year, calendar.promos().iter().map(|p| p.span.start()));
        let holidays = count_in(year, calendar.holidays().iter().map(|h| h.span.start()));
        tracing::info!(year, campaigns, promos, holidays, "event calendar");
    }
}

fn count_in(year: i32, starts: impl Iterator<Item = chrono::NaiveDate>) -> usize {
    starts.filter(|start| start.year() == year).count()
}
