//! Terminal input seam.
//!
//! # Responsibility
//! - Provide the single abstraction for reading interactive user input.
//! - Keep token and line reads consistent so no call site needs a manual
//!   buffer-clearing step between read styles.
//!
//! # Invariants
//! - `read_token` consumes the remainder of its line, terminator included,
//!   so a following `read_line` never sees a spurious empty read.
//! - End of input is reported as `Ok(None)`, never as an error.

use std::io::{self, BufRead};

/// Buffered reader over the user-facing input stream.
pub struct InputReader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads one raw line with the trailing terminator stripped.
    ///
    /// The line content is returned as entered, untrimmed. Returns
    /// `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.inner.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(Some(buffer))
    }

    /// Reads the first whitespace-delimited token of the next non-blank
    /// line, discarding the rest of that line.
    ///
    /// Blank lines are skipped, matching how token-style reads treat
    /// separator whitespace. Returns `Ok(None)` at end of input.
    pub fn read_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}
