//! Supply-side generator.
//!
//! Emits the supplier directory, delivery batches, and supplier returns as
//! `suppliers.csv`, `inventory_batches.csv`, and `stock_movements_returns.csv`.

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use sarisim_catalog::{STORE_NAME, builtin};
use sarisim_cli::RunConfig;
use sarisim_export::{SupplyReport, write_batches_csv, write_returns_csv, write_suppliers_csv};
use sarisim_supply::{SupplySimulator, directory};

fn main() -> anyhow::Result<()> {
    sarisim_observability::init();

    let run_id = Uuid::now_v7();
    let config = RunConfig::from_env()?;
    let products = builtin::products()?;
    let suppliers = directory();

    tracing::info!(
        %run_id,
        store = STORE_NAME,
        start = %config.range.start(),
        end = %config.range.end(),
        days = config.range.num_days(),
        products = products.len(),
        suppliers = suppliers.len(),
        seed = config.seed,
        "supply run"
    );

    let simulator = SupplySimulator::new(&products, &suppliers, config.inflation())?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let ledger = simulator.simulate(config.range, &mut rng)?;
    tracing::info!(
        batches = ledger.batches.len(),
        returns = ledger.returns.len(),
        "supply ledger generated"
    );

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;

    let suppliers_path = config.out_path("suppliers.csv");
    write_suppliers_csv(&suppliers_path, &suppliers)
        .with_context(|| format!("writing {}", suppliers_path.display()))?;
    tracing::info!(
        file = %suppliers_path.display(),
        rows = suppliers.len(),
        "suppliers written"
    );

    let batches_path = config.out_path("inventory_batches.csv");
    write_batches_csv(&batches_path, &ledger.batches)
        .with_context(|| format!("writing {}", batches_path.display()))?;
    tracing::info!(
        file = %batches_path.display(),
        rows = ledger.batches.len(),
        "inventory batches written"
    );

    let returns_path = config.out_path("stock_movements_returns.csv");
    write_returns_csv(&returns_path, &ledger.returns)
        .with_context(|| format!("writing {}", returns_path.display()))?;
    tracing::info!(
        file = %returns_path.display(),
        rows = ledger.returns.len(),
        "stock movements written"
    );

    println!("{}", SupplyReport::new(&ledger, &suppliers, &products));
    Ok(())
}
