//! Line-buffered single-byte input channel.

use std::io::{self, BufRead};

/// Wraps a buffered reader so that each read delivers exactly one byte and
/// then drops the rest of that line.
///
/// This mirrors terminal-style input: a user who types `AB` and presses
/// enter wants the program to see `A`, not to have `B` and the newline
/// linger and feed later reads. After every successful byte, everything up
/// to and including the next `\n` is discarded, so the next read starts on
/// a fresh line.
pub struct LineInput<R> {
    inner: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read one byte, then discard the remainder of the current line.
    ///
    /// Returns `Ok(None)` once the underlying reader is exhausted; nothing
    /// is discarded in that case.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        if self.inner.read(&mut buf)? == 0 {
            return Ok(None);
        }
        self.discard_line()?;
        Ok(Some(buf[0]))
    }

    /// Consume pending input through the next `\n` (or end of input),
    /// without copying the dropped bytes anywhere.
    fn discard_line(&mut self) -> io::Result<()> {
        loop {
            let (done, used) = {
                let available = self.inner.fill_buf()?;
                if available.is_empty() {
                    (true, 0)
                } else {
                    match available.iter().position(|&b| b == b'\n') {
                        Some(i) => (true, i + 1),
                        None => (false, available.len()),
                    }
                }
            };
            self.inner.consume(used);
            if done {
                return Ok(());
            }
        }
    }
}
