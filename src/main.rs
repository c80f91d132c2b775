use anyhow::Result;
use clap::Parser;
use tracing::info;

use trip_gateway::config::settings::{Args, Settings};
use trip_gateway::server::server::{start, AppState};
use trip_gateway::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read env / args, init logging
    // -------------------------------

    let args = Args::parse();
    logging::run(args.log_level)?;

    // -------------------------------
    // 2. Resolve settings
    // -------------------------------

    let settings = Settings::resolve(&args);
    info!(
        "amadeus env: {}, base url: {}",
        settings.env.as_str(),
        settings.base_url
    );

    // -------------------------------
    // 3. Build shared state and serve
    // -------------------------------

    let state = AppState::new(settings);
    info!("Service starting...");
    start(state).await?;

    Ok(())
}
