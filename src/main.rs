use anyhow::{Context, Result};
use clap::Parser;
use mem_shortener::config::{self, Config};
use mem_shortener::server;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener service.
///
/// Flags override the corresponding environment variables.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address in `host:port` form (overrides `LISTEN`)
    #[arg(long)]
    listen: Option<String>,

    /// Log format, `text` or `json` (overrides `LOG_FORMAT`)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.listen, cli.log_format)?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
