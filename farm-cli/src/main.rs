use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use farm_cli::app;
use farm_core::StoreConfig;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive farm record-keeping wizard.
///
/// Walks through five steps of seasonal farm data (crop, irrigation,
/// fertilizer, additional, review), keeping an auto-saved draft on disk so
/// an interrupted session can be resumed later.
#[derive(Debug, Parser)]
struct Cli {
    /// Draft storage backend to use.
    #[arg(long, default_value = "file")]
    backend: String,

    /// Directory holding the draft blob (file backend only).
    #[arg(long, default_value = ".")]
    data_dir: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let store_config = StoreConfig {
        backend: cli.backend,
        location: cli.data_dir,
    };

    debug!("opening {} draft store", store_config.backend);
    app::run(&store_config).await
}
