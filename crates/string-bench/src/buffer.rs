//! Reusable text accumulators.
//!
//! Two flavours are provided:
//! - [`OutBuffer`]: write-only, backed by a `String`
//! - [`DuplexBuffer`]: readable and writable, backed by an `io::Cursor`
//!
//! Both implement [`fmt::Write`], so fragments and numbers go in through
//! `write!` and the accumulated text comes out through [`TextBuffer::text`].

use std::fmt;
use std::io::{self, Cursor, Read, Write};

/// A text sink that can be emptied and reused without reallocating.
pub trait TextBuffer: fmt::Write {
    /// Drop the current contents and rewind.
    ///
    /// Keeps the allocation; nothing written before the reset is observable
    /// afterwards.
    fn reset(&mut self);

    /// Accumulated text since the last reset.
    fn text(&self) -> String;
}

/// Write-only text accumulator.
#[derive(Debug, Default, Clone)]
pub struct OutBuffer {
    buf: String,
}

impl OutBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl fmt::Write for OutBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl TextBuffer for OutBuffer {
    fn reset(&mut self) {
        self.buf.clear();
    }

    fn text(&self) -> String {
        self.buf.clone()
    }
}

/// Bidirectional text accumulator.
///
/// Writes append at the put position of the inner cursor; reads consume from
/// an independent get position, so text can be read back while more is
/// still being written.
#[derive(Debug, Default, Clone)]
pub struct DuplexBuffer {
    cursor: Cursor<Vec<u8>>,
    read_pos: usize,
}

impl DuplexBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: Cursor::new(Vec::new()),
            read_pos: 0,
        }
    }

    fn unread(&self) -> &[u8] {
        let written = self.cursor.get_ref();
        &written[self.read_pos.min(written.len())..]
    }
}

impl fmt::Write for DuplexBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.cursor.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl Write for DuplexBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for DuplexBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut unread = self.unread();
        let n = unread.read(buf)?;
        self.read_pos += n;
        Ok(n)
    }
}

impl TextBuffer for DuplexBuffer {
    fn reset(&mut self) {
        self.cursor.get_mut().clear();
        self.cursor.set_position(0);
        self.read_pos = 0;
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(self.cursor.get_ref()).into_owned()
    }
}
