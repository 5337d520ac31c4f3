use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

/// Line source over SAM text, reusing one buffer for every line.
pub struct SamLines<R: BufRead> {
    inner: R,
    buf: String,
    line_number: usize,
}

impl SamLines<Box<dyn BufRead>> {
    /// Open a file, transparently decompressing it if needed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> crate::error::Result<Self> {
        let (reader, format) = niffler::from_path(path.as_ref())?;
        debug!("reading {} ({:?})", path.as_ref().display(), format);
        Ok(Self::new(Box::new(BufReader::new(reader))))
    }

    pub fn stdin() -> Self {
        Self::new(Box::new(io::stdin().lock()))
    }
}

impl<R: BufRead> SamLines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line and return it with its 1-based line number.
    ///
    /// The `\n` or `\r\n` terminator is removed; nothing else is trimmed.
    pub fn next_line(&mut self) -> io::Result<Option<(usize, &str)>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let line = match self.buf.strip_suffix('\n') {
            Some(line) => line.strip_suffix('\r').unwrap_or(line),
            None => self.buf.as_str(),
        };
        Ok(Some((self.line_number, line)))
    }
}
