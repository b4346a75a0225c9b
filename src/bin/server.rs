//! lineshot-server: accepts one connection at a time, reads one line,
//! prints it, and answers with a fixed acknowledgment line.

use lineshot::config::ServerConfig;
use lineshot::server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        host = %config.host,
        port = config.port,
        "Starting lineshot server"
    );

    // A bind failure is fatal; anything that goes wrong after that is
    // handled inside the accept loop.
    let server = Server::bind(&config).await?;
    server.run().await?;
    Ok(())
}
