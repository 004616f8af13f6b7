//! # Ferrous GSLB
//!
//! Remote-backend server answering name server lookups with health-aware,
//! weighted, client-sticky record selection.

mod bootstrap;
mod server;

use clap::Parser;
use ferrous_gslb_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-gslb")]
#[command(version)]
#[command(about = "Global server load balancing backend for remote-backend name servers")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port for the remote-backend endpoint
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Path to SQLite record database
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            http_port: self.port,
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!("Ferrous GSLB starting");

    let pool = bootstrap::init_database(&config.database).await?;
    let state = bootstrap::build_app_state(&config, pool)?;

    server::start_http_server(&config.server, state).await
}
