//! Sequential TCP server: one connection at a time, one line per connection.
//!
//! The accept loop handles each connection to completion before accepting
//! the next, so a slow client holds up later clients; that is the intended
//! behavior of this server. A failure inside a single connection is logged
//! and the loop moves on. Only a bind failure is fatal.

use crate::config::ServerConfig;
use crate::error::ExchangeError;
use crate::protocol::{read_line, write_line, ACKNOWLEDGMENT};
use std::net::SocketAddr;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

/// Server instance
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the listening endpoint given by the configuration.
    ///
    /// Fails with [`ExchangeError::Bind`] if the port is already in use or
    /// the process lacks permission; the caller is expected to exit.
    pub async fn bind(config: &ServerConfig) -> Result<Self, ExchangeError> {
        let addr = config.addr();
        debug!(address = %addr, "Opening server socket");

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ExchangeError::Bind(addr.clone(), e))?;

        info!(address = %addr, "Server listening");
        Ok(Server { listener })
    }

    /// Local address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections forever, performing one request/response exchange
    /// per connection before accepting the next.
    pub async fn run(&self) -> Result<(), ExchangeError> {
        loop {
            debug!("Waiting for an incoming client connection");

            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    debug!(peer = %addr, "Received a client connection");

                    match handle_connection(stream).await {
                        Ok(_) => debug!(peer = %addr, "Exchange complete"),
                        Err(e) => {
                            // One bad connection must not take the server down.
                            warn!(peer = %addr, error = %e, "Connection error");
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}

/// Perform one request/response exchange on an accepted connection.
/// The connection is dropped on every exit path.
async fn handle_connection(stream: TcpStream) -> Result<Option<String>, ExchangeError> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    exchange_once(&mut reader, &mut writer).await
}

/// Read one line, report it, then write the fixed acknowledgment.
///
/// The received line is printed before the reply is attempted, so a line
/// that was read is never lost to a reply failure. A peer that closes
/// before sending a complete line yields `Ok(None)`; the acknowledgment is
/// still attempted.
async fn exchange_once<R, W>(reader: &mut R, writer: &mut W) -> Result<Option<String>, ExchangeError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    debug!("Waiting for client to send a message");
    let message = read_line(reader).await?;

    match &message {
        Some(message) => println!("Client sent the following message: '{message}'"),
        None => info!("Client closed before sending a complete line"),
    }

    write_line(writer, ACKNOWLEDGMENT).await?;
    debug!("Response sent to the client");

    Ok(message)
}
