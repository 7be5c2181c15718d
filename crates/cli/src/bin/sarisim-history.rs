//! Transaction history generator.
//!
//! Simulates per-customer visits day by day and writes `sales_history.csv`
//! plus the `events_log.csv` the rows refer back to.

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use sarisim_catalog::{STORE_NAME, builtin};
use sarisim_cli::RunConfig;
use sarisim_cli::config::ANNUAL_INFLATION_RATE;
use sarisim_cli::run::{self, PROGRESS_EVERY_DAYS};
use sarisim_core::Centavos;
use sarisim_demand::{CalendarConfig, EventCalendar};
use sarisim_export::{SalesHistoryWriter, SalesReport, write_events_csv};
use sarisim_sales::TransactionSimulator;

/// Headline revenue figure for the banner. Actual volume comes from the
/// transaction-count model, not from this target.
const BASE_DAILY_REVENUE_TARGET: Centavos = Centavos::from_pesos(82_500);

fn main() -> anyhow::Result<()> {
    sarisim_observability::init();

    let run_id = Uuid::now_v7();
    let config = RunConfig::from_env()?;
    let products = builtin::products()?;
    let inflation = config.inflation();

    tracing::info!(
        %run_id,
        store = STORE_NAME,
        start = %config.range.start(),
        end = %config.range.end(),
        days = config.range.num_days(),
        products = products.len(),
        seed = config.seed,
        "sales history run"
    );
    tracing::info!(
        annual_inflation = ANNUAL_INFLATION_RATE,
        daily_revenue_target = %BASE_DAILY_REVENUE_TARGET,
        "model parameters"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let calendar = EventCalendar::generate(
        config.range,
        &products,
        &builtin::campaign_brands(),
        &CalendarConfig::transactions(),
        &mut rng,
    )?;
    run::log_calendar(&calendar);

    let simulator = TransactionSimulator::new(&products, &calendar, inflation)?;

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;
    let history_path = config.out_path("sales_history.csv");
    let mut writer = SalesHistoryWriter::create(&history_path)
        .with_context(|| format!("opening {}", history_path.display()))?;

    let mut report = SalesReport::new(config.range, inflation);
    for (index, day) in config.range.iter_days().enumerate() {
        for tx in simulator.simulate_day(day, &mut rng)? {
            report.record(&tx);
            writer.write_transaction(&tx)?;
        }
        if (index + 1) % PROGRESS_EVERY_DAYS == 0 {
            tracing::info!(
                day = %day,
                transactions = report.transactions(),
                rows = report.rows(),
                "progress"
            );
        }
    }
    writer.finish()?;
    tracing::info!(
        file = %history_path.display(),
        rows = report.rows(),
        "sales history written"
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
