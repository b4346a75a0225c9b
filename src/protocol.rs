//! Line wire format shared by the client and server.
//!
//! Messages are plain text, one per line, terminated by `\n`. There is no
//! length prefix; termination is solely the newline character, so message
//! content must not contain an embedded newline.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Fixed acknowledgment the server sends for every received line,
/// regardless of the line's content.
pub const ACKNOWLEDGMENT: &str = "Your message has been received. Thank you.";

/// Read one complete line from the peer.
///
/// Blocks until a `\n` arrives or the peer closes. Returns the line with
/// the terminator stripped (a trailing `\r` is also stripped), or `None`
/// if the peer closed before sending a complete line.
pub async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Ok(None);
    }
    if !line.ends_with('\n') {
        // Peer closed mid-line; no complete message arrived.
        return Ok(None);
    }
    line.pop();
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Write one message followed by the `\n` terminator and flush.
pub async fn write_line<W: AsyncWrite + Unpin>(
    writer: &mut W,
    message: &str,
) -> std::io::Result<()> {
    writer.write_all(message.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
