//! lineshot-client: connects to the server, sends one line, prints the
//! one-line reply, and exits.

use lineshot::client;
use lineshot::config::ClientConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ClientConfig::load()?;

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
        "Starting lineshot client"
    );

    // Any failure here is fatal: the error prints and the process exits
    // with a non-zero status.
    let reply = client::exchange(&config).await?;
    println!("Server sent the following message: '{reply}'");

    info!("Client socket connection closed");
    Ok(())
}
