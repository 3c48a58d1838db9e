use tokio::io::{AsyncRead, AsyncReadExt};

const CHUNK_SIZE: usize = 4096;

/// Splits a child's output into lines on `\r` or `\n`.
///
/// Bytes are decoded lossily, so invalid UTF-8 never ends the stream.
/// Runs of separators (`\r\n`, progress redraws) collapse into one break and
/// produce no empty lines.
pub(crate) struct ToolLines<R> {
    reader: R,
    buffer: Vec<u8>,
    eof: bool,
}

impl<R> ToolLines<R>
where
    R: AsyncRead + Unpin,
{
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(8192),
            eof: false,
        }
    }

    pub(crate) async fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            if let Some(idx) = self
                .buffer
                .iter()
                .position(|byte| *byte == b'\r' || *byte == b'\n')
            {
                let line_bytes: Vec<u8> = self.buffer.drain(..=idx).collect();
                let line_bytes = &line_bytes[..idx];
                if line_bytes.is_empty() {
                    continue;
                }
                return Ok(Some(String::from_utf8_lossy(line_bytes).into_owned()));
            }

            if self.eof {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let rest = std::mem::take(&mut self.buffer);
                return Ok(Some(String::from_utf8_lossy(&rest).into_owned()));
            }

            let read = self.reader.read(&mut chunk).await?;
            if read == 0 {
                self.eof = true;
            } else {
                self.buffer.extend_from_slice(&chunk[..read]);
            }
        }
    }
}
