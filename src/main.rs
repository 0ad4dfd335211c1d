//! Story relay server.
//!
//! ```text
//!   client ──POST /api/run {"story": ...}──▶ story-relay ──POST {base}/{workflow}──▶ workflow API
//!          ◀──────── JSON reply ──────────              ◀──────── JSON reply ─────
//! ```
//!
//! Credentials are read from the environment on every request
//! (`WORKFLOW_ID`, `AITUTOR_API_KEY` by default).

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use story_relay::config::load_or_default;
use story_relay::lifecycle::shutdown_signal;
use story_relay::observability::{logging, metrics};
use story_relay::RelayServer;

#[derive(Parser)]
#[command(name = "story-relay")]
#[command(about = "Relays story prompts to a workflow-execution API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("story-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        workflow_id_var = %config.secrets.workflow_id_var,
        api_key_var = %config.secrets.api_key_var,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = RelayServer::new(config)?;
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
