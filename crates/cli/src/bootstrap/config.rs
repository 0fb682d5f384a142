use comfort_index_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        cities = %config.cities.path,
        raw_ttl_secs = config.cache.raw_ttl_secs,
        aggregate_ttl_secs = config.cache.aggregate_ttl_secs,
        "Configuration loaded"
    );

    Ok(config)
}
