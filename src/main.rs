use madde_ledger::clock::SystemClock;
use madde_ledger::config::Config;
use madde_ledger::http;
use madde_ledger::lifecycle::{setup_tracing, LedgerSystem};
use std::error::Error;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = Config::load()?;
    info!(?config, "Starting ledger");

    let system = LedgerSystem::start(&config, Arc::new(SystemClock))?;
    http::serve(config.port, system.state()).await?;

    system.shutdown().await?;
    info!("Ledger stopped");
    Ok(())
}
