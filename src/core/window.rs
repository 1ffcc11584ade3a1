//! Bounded lookahead window over a byte stream
//!
//! The window keeps the unread bytes of the stream in a single growable
//! buffer. Callers peek at a prefix of the unread bytes, decide how much
//! of it they need, and then consume or discard it. Slices handed out by
//! [`ByteWindow::peek`] and [`ByteWindow::consume`] borrow the window, so
//! they cannot outlive the next operation that may move the buffer.

use crate::core::error::{Phase, XmpError};
use std::io::{ErrorKind, Read};

/// Failure of a window operation, before a parsing phase is attached
#[derive(Debug)]
pub enum WindowError {
    /// The requested peek is larger than the window ceiling
    Full {
        /// Window ceiling in bytes
        limit: usize,
    },
    /// The underlying stream failed
    Io(std::io::Error),
}

impl WindowError {
    /// Attach the parsing phase that triggered the failure
    pub fn at(self, phase: Phase) -> XmpError {
        match self {
            WindowError::Full { limit } => XmpError::BufferFull { phase, limit },
            WindowError::Io(source) => XmpError::Io { phase, source },
        }
    }
}

/// Lookahead window over a [`Read`] source
pub struct ByteWindow<R> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    end: usize,
    eof: bool,
    limit: usize,
}

impl<R: Read> ByteWindow<R> {
    /// Create a window with an initial capacity and a growth ceiling
    pub fn new(inner: R, initial: usize, limit: usize) -> Self {
        let initial = initial.min(limit).max(1);
        Self {
            inner,
            buf: vec![0u8; initial],
            pos: 0,
            end: 0,
            eof: false,
            limit,
        }
    }

    /// Window ceiling in bytes
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of unread bytes currently buffered
    pub fn buffered(&self) -> usize {
        self.end - self.pos
    }

    /// Whether the underlying stream has reported end of stream
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Whether the stream is exhausted and nothing is left to read
    pub fn is_exhausted(&self) -> bool {
        self.eof && self.pos >= self.end
    }

    /// Return up to `n` unread bytes without consuming them
    ///
    /// The slice is shorter than `n` only when the stream ended. Short
    /// reads from the source are retried until `n` bytes are buffered.
    pub fn peek(&mut self, n: usize) -> Result<&[u8], WindowError> {
        if n > self.limit {
            return Err(WindowError::Full { limit: self.limit });
        }
        self.fill_to(n).map_err(WindowError::Io)?;
        let available = n.min(self.end - self.pos);
        Ok(&self.buf[self.pos..self.pos + available])
    }

    /// Consume `n` buffered bytes and return them
    ///
    /// `n` is clamped to what is buffered.
    pub fn consume(&mut self, n: usize) -> &[u8] {
        let start = self.pos;
        self.pos += n.min(self.end - self.pos);
        &self.buf[start..self.pos]
    }

    /// Skip `n` buffered bytes, returning how many were skipped
    pub fn discard(&mut self, n: usize) -> usize {
        let n = n.min(self.end - self.pos);
        self.pos += n;
        n
    }

    fn fill_to(&mut self, n: usize) -> std::io::Result<()> {
        while self.end - self.pos < n && !self.eof {
            if self.pos + n > self.buf.len() {
                self.compact();
                if n > self.buf.len() {
                    self.buf.resize(n, 0);
                }
            }
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => self.eof = true,
                Ok(read) => self.end += read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    // Moves the unread bytes to the start of the buffer.
    fn compact(&mut self) {
        if self.pos == 0 {
            return;
        }
        let remaining = self.end - self.pos;
        if remaining > 0 {
            self.buf.copy_within(self.pos..self.end, 0);
        }
        self.end = remaining;
        self.pos = 0;
    }
}

/// Next peek size for a scan that has outgrown `size`
///
/// Returns `None` once `size` already reached the ceiling.
pub fn grow(size: usize, block: usize, limit: usize) -> Option<usize> {
    if size >= limit {
        None
    } else {
        Some((size + block).min(limit))
    }
}
