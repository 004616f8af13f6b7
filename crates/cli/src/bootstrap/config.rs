use ferrous_gslb_domain::{CliOverrides, Config};

/// Runs before logging is initialized, so nothing is logged from here.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
