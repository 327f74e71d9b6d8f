use anyhow::Context;
use clap::Parser;
use ferrous_doh_domain::CliOverrides;
use tracing::debug;

mod bootstrap;
mod di;
mod lookup;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - send one A query over DNS-over-HTTPS and print the raw reply")]
struct Cli {
    /// Domain name to query
    domain: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DoH endpoint URL
    #[arg(short = 'e', long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Enforce the RFC 1035 63-byte label limit
    #[arg(long)]
    strict_labels: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        endpoint: cli.endpoint.clone(),
        timeout: cli.timeout,
        strict_labels: cli.strict_labels,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)
        .context("Failed to load configuration")?;

    bootstrap::init_logging(&config.logging);

    debug!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let services = di::LookupServices::new(&config)?;
    let mut stdout = std::io::stdout().lock();

    lookup::run(&services.lookup, &cli.domain, &mut stdout).await?;

    Ok(())
}
