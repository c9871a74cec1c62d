//! Line-oriented console abstraction.
//!
//! The session controller talks to the user through this seam so that
//! tests can script input and capture output.

use std::io::{BufRead, Write};

/// Banner printed at the top of each menu screen.
const BANNER: &str = "--------------------  Blob Storage Console  --------------------";

/// Paired line reader and status writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read one line of input, trimmed of the trailing newline.
    ///
    /// Returns `None` when the input stream is exhausted.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Write one line of status text.
    pub fn write_line(&mut self, line: impl AsRef<str>) -> std::io::Result<()> {
        self.writer.write_all(line.as_ref().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    /// Print a prompt line, then read the response.
    pub fn prompt(&mut self, message: &str) -> std::io::Result<Option<String>> {
        self.write_line(message)?;
        self.read_line()
    }

    /// Print the screen banner.
    pub fn banner(&mut self) -> std::io::Result<()> {
        self.write_line(BANNER)
    }

    /// Consume the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
