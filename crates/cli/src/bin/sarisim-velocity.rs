//! Daily velocity generator.
//!
//! Simulates each product's aggregate movement per day and writes
//! `daily_sales.csv` plus the `events_log.csv` the rows refer back to.

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use sarisim_catalog::{STORE_NAME, builtin};
use sarisim_cli::RunConfig;
use sarisim_cli::run::{self, PROGRESS_EVERY_DAYS};
use sarisim_demand::{CalendarConfig, EventCalendar};
use sarisim_export::{DailySalesWriter, VelocityReport, write_events_csv};
use sarisim_sales::VelocitySimulator;

fn main() -> anyhow::Result<()> {
    sarisim_observability::init();

    let run_id = Uuid::now_v7();
    let config = RunConfig::from_env()?;
    let products = builtin::products()?;

    tracing::info!(
        %run_id,
        store = STORE_NAME,
        start = %config.range.start(),
        end = %config.range.end(),
        days = config.range.num_days(),
        products = products.len(),
        seed = config.seed,
        "daily velocity run"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let calendar = EventCalendar::generate(
        config.range,
        &products,
        &builtin::campaign_brands(),
        &CalendarConfig::velocity(),
        &mut rng,
    )?;
    run::log_calendar(&calendar);

    let simulator = VelocitySimulator::new(&products, &calendar, config.seed);

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;
    let sales_path = config.out_path("daily_sales.csv");
    let mut writer = DailySalesWriter::create(&sales_path)
        .with_context(|| format!("opening {}", sales_path.display()))?;

    let mut report = VelocityReport::new();
    for (index, day) in config.range.iter_days().enumerate() {
        for record in simulator.simulate_day(day, &mut rng) {
            report.record(&record);
            writer.write_record(&record)?;
        }
        if (index + 1) % PROGRESS_EVERY_DAYS == 0 {
            tracing::info!(day = %day, rows = report.rows(), "progress");
        }
    }
    writer.finish()?;
    tracing::info!(
        file = %sales_path.display(),
        rows = report.rows(),
        "daily sales written"
    );

    let events_path = config.out_path("events_log.csv");
    write_events_csv(&events_path, &calendar)
        .with_context(|| format!("writing {}", events_path.display()))?;
    tracing::info!(
        file = %events_path.display(),
        events = calendar.campaigns().len() + calendar.promos().len() + calendar.holidays().len(),
        "events log written"
    );

    println!("{report}");
    Ok(())
}
