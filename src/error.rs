//! Error taxonomy for the line exchange.

use std::io;

/// Errors that can occur while performing an exchange.
///
/// Every error is fatal on the client side. On the server side only `Bind`
/// is fatal; errors inside a single connection are logged and the accept
/// loop continues.
#[derive(Debug)]
pub enum ExchangeError {
    /// The listening endpoint could not be bound (port already in use, or
    /// the process lacks permission).
    Bind(String, io::Error),
    /// The server could not be reached (connection refused, host
    /// unreachable, or name resolution failure).
    Connect(String, io::Error),
    /// A read or write failed mid-exchange, including a peer reset.
    Io(io::Error),
    /// The peer closed the connection before sending a complete line.
    PrematureClose,
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExchangeError::Bind(addr, e) => {
                write!(f, "Failed to bind '{addr}': {e}")
            }
            ExchangeError::Connect(addr, e) => {
                write!(f, "Failed to connect to '{addr}': {e}")
            }
            ExchangeError::Io(e) => {
                write!(f, "I/O error during exchange: {e}")
            }
            ExchangeError::PrematureClose => {
                write!(f, "Peer closed the connection before sending a complete line")
            }
        }
    }
}

impl std::error::Error for ExchangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExchangeError::Bind(_, e) => Some(e),
            ExchangeError::Connect(_, e) => Some(e),
            ExchangeError::Io(e) => Some(e),
            ExchangeError::PrematureClose => None,
        }
    }
}

impl From<io::Error> for ExchangeError {
    fn from(e: io::Error) -> Self {
        ExchangeError::Io(e)
    }
}
