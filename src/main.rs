use anyhow::{Context, Result};
use shortly::config::{self, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config)?;
    config.print_summary();

    shortly::server::run(config).await
}

/// Installs the global subscriber in the format selected by `LOG_FORMAT`.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
