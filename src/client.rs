//! One-shot TCP client: send one line, read the one-line reply.

use crate::config::ClientConfig;
use crate::error::ExchangeError;
use crate::protocol::{read_line, write_line};
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tracing::debug;

/// Perform exactly one request/response exchange against the configured
/// server and return the server's reply line.
///
/// Connects, writes the configured message plus its terminator, then blocks
/// until the server's one-line reply arrives. Every failure is fatal to the
/// exchange and returned to the caller. The connection is dropped on every
/// exit path, success or error.
pub async fn exchange(config: &ClientConfig) -> Result<String, ExchangeError> {
    let addr = config.addr();
    debug!(address = %addr, "Opening a client socket connection");

    let stream = TcpStream::connect(&addr)
        .await
        .map_err(|e| ExchangeError::Connect(addr.clone(), e))?;
    debug!("Client socket opened");

    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    write_line(&mut writer, &config.message).await?;
    debug!("Message sent to the server");

    debug!("Waiting for the server to send a message");
    match read_line(&mut reader).await? {
        Some(reply) => Ok(reply),
        None => Err(ExchangeError::PrematureClose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn config_for(port: u16) -> ClientConfig {
        ClientConfig {
            host: "127.0.0.1".to_string(),
            port,
            message: "hello".to_string(),
            log_level: "info".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_error_when_nobody_listens() {
        // Bind then immediately drop to find a port with no listener.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = exchange(&config_for(port)).await.unwrap_err();
        assert!(matches!(err, ExchangeError::Connect(_, _)));
    }

    #[tokio::test]
    async fn test_premature_close_when_server_sends_nothing() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            // Read the client's line, then close without replying. Reading
            // first avoids a reset racing ahead of the clean close.
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let _ = read_line(&mut reader).await.unwrap();
        });

        let err = exchange(&config_for(port)).await.unwrap_err();
        assert!(matches!(err, ExchangeError::PrematureClose));
        server.await.unwrap();
    }
}
