//! gstd wire framing
//!
//! A request is a single space followed by the UTF-8 command text.
//! A response is every byte up to the first terminator byte:
//! ```text
//! -> " pipeline_create p0 videotestsrc ! fakesink"
//! <- "{ \"code\" : 0, ... }\0"
//! ```

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::common::{Error, Result};

/// Size of each read from the stream
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Write one command, prefixed with the space the daemon discards
pub async fn write_command<W: AsyncWrite + Unpin>(writer: &mut W, command: &str) -> Result<()> {
    let mut request = Vec::with_capacity(command.len() + 1);
    request.push(b' ');
    request.extend_from_slice(command.as_bytes());

    writer.write_all(&request).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one response message
///
/// Accumulates chunks until `terminator` shows up and returns everything
/// before it. Bytes following the terminator in the same chunk are dropped.
/// When a chunk arrives while the bytes already buffered exceed
/// `max_response_size`, the read fails without looking at that chunk.
pub async fn read_until_terminator<R: AsyncRead + Unpin>(
    reader: &mut R,
    terminator: u8,
    max_response_size: Option<usize>,
) -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];

    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(Error::closed_before_terminator(buffer.len()));
        }

        if let Some(limit) = max_response_size {
            if buffer.len() > limit {
                return Err(Error::response_too_large(limit, buffer.len()));
            }
        }

        let received = &chunk[..n];
        let end = received.iter().position(|&b| b == terminator);
        buffer.extend_from_slice(&received[..end.unwrap_or(n)]);

        if end.is_some() {
            return Ok(String::from_utf8_lossy(&buffer).into_owned());
        }

        tracing::trace!(buffered = buffer.len(), "partial response, waiting for terminator");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_write_command_prepends_space() {
        let mut output = Vec::new();
        write_command(&mut output, "list_pipelines").await.unwrap();
        assert_eq!(output, b" list_pipelines");
    }

    #[tokio::test]
    async fn test_read_stops_at_terminator() {
        let mut reader = Cursor::new(b"abc\0garbage".to_vec());
        let result = read_until_terminator(&mut reader, 0, None).await.unwrap();
        assert_eq!(result, "abc");
    }

    #[tokio::test]
    async fn test_read_custom_terminator() {
        let mut reader = Cursor::new(b"{\"code\":0}\n{\"code\":1}\n".to_vec());
        let result = read_until_terminator(&mut reader, b'\n', None).await.unwrap();
        assert_eq!(result, "{\"code\":0}");
    }

    #[tokio::test]
    async fn test_read_accumulates_across_chunks() {
        let (mut client, mut server) = tokio::io::duplex(64);

        let writer = tokio::spawn(async move {
            server.write_all(b"first ").await.unwrap();
            server.flush().await.unwrap();
            tokio::task::yield_now().await;
            server.write_all(b"second\0").await.unwrap();
            server
        });

        let result = read_until_terminator(&mut client, 0, None).await.unwrap();
        assert_eq!(result, "first second");
        drop(writer.await.unwrap());
    }

    #[tokio::test]
    async fn test_read_empty_payload() {
        let mut reader = Cursor::new(vec![0u8]);
        let result = read_until_terminator(&mut reader, 0, None).await.unwrap();
        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_read_eof_without_terminator() {
        let mut reader = Cursor::new(b"partial".to_vec());
        let err = read_until_terminator(&mut reader, 0, None).await.unwrap_err();
        assert!(err.is_connection());
    }

    #[tokio::test]
    async fn test_read_too_large_on_next_chunk() {
        let (mut client, mut server) = tokio::io::duplex(64);

        let writer = tokio::spawn(async move {
            server.write_all(b"0123456789").await.unwrap();
            server.flush().await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            server.write_all(b"more").await.unwrap();
            server
        });

        let err = read_until_terminator(&mut client, 0, Some(4)).await.unwrap_err();
        match err {
            Error::ResponseTooLarge { limit, received } => {
                assert_eq!(limit, 4);
                assert_eq!(received, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        drop(writer.await.unwrap());
    }

    #[tokio::test]
    async fn test_read_over_limit_waits_for_next_chunk() {
        let (mut client, mut server) = tokio::io::duplex(64);
        server.write_all(b"0123456789").await.unwrap();

        // Over the limit, but nothing else has arrived yet
        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            read_until_terminator(&mut client, 0, Some(4)),
        )
        .await;
        assert!(pending.is_err());
        drop(server);
    }

    #[tokio::test]
    async fn test_read_terminated_chunk_past_limit_succeeds() {
        let mut reader = Cursor::new(b"123456\0".to_vec());
        let result = read_until_terminator(&mut reader, 0, Some(4)).await.unwrap();
        assert_eq!(result, "123456");
    }

    #[tokio::test]
    async fn test_read_replaces_invalid_utf8() {
        let mut reader = Cursor::new(vec![b'o', b'k', 0xff, 0]);
        let result = read_until_terminator(&mut reader, 0, None).await.unwrap();
        assert_eq!(result, "ok\u{fffd}");
    }
}
