//! # Comfort Index Server
//!
//! Serves per-city weather observations and a ranked comfort index.

use clap::Parser;
use comfort_index::{bootstrap, di, server};
use comfort_index_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "comfort-index")]
#[command(version)]
#[command(about = "Weather comfort index ranking service")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Path to the city list JSON document
    #[arg(long)]
    cities: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        cities_path: cli.cities,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Comfort index server starting");

    let services = di::Services::build(&config)?;
    let shutdown = CancellationToken::new();
    server::spawn_shutdown_listener(shutdown.clone());

    server::start_web_server(&config, services.app_state(&config), shutdown).await?;

    info!("Comfort index server stopped");
    Ok(())
}
