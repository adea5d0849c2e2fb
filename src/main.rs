use std::path::PathBuf;

use clap::Parser;
use survey_core::config::Config;

#[derive(Parser)]
#[command(name = "survey-intake", about = "Survey intake service")]
struct Cli {
    /// TOML config file. Defaults to ./survey-intake.toml when present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Listen port, overriding config and environment.
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = survey_intake::apply_overrides(Config::load(cli.config.as_deref())?, cli.port);
    tracing::debug!(
        server = ?config.server,
        backend = ?config.store.backend,
        database = %config.store.database,
        "configuration loaded"
    );

    survey_intake::serve(config).await
}
