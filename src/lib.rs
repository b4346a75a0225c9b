//! lineshot: a single-shot TCP line exchange.
//!
//! Two standalone binaries are built from this crate:
//! - `lineshot-server` accepts one connection at a time, reads one line,
//!   prints it, and answers with a fixed acknowledgment line.
//! - `lineshot-client` connects, sends one line, prints the one-line reply,
//!   and exits.
//!
//! The wire format is plain text: one UTF-8 message per line, terminated by
//! `\n`, with no length prefix and no encoding negotiation. Each connection
//! carries exactly one message in each direction and is never reused.

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
