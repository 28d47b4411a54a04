//! Capacity-enforcing writer over a caller-owned byte buffer.
//!
//! This module contains [`BoundedWriter`], the only place where the formatter
//! touches the output buffer, and [`Formatted`], the outcome of a formatting
//! call.

use core::fmt;

/// Outcome of writing text into a bounded buffer.
///
/// Both variants carry the number of characters written, terminator
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Formatted {
    /// The whole text and its terminator fit into the buffer.
    Complete(usize),
    /// The buffer was too small, only a prefix of the text was written.
    ///
    /// The count is always strictly less than the buffer capacity, unless
    /// the capacity is zero.
    Truncated(usize),
}

impl Formatted {
    /// Returns the number of characters written, terminator excluded.
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            Self::Complete(len) | Self::Truncated(len) => *len,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated(..))
    }
}

impl From<Formatted> for usize {
    #[inline]
    fn from(v: Formatted) -> Self {
        v.len()
    }
}

/// Writer that never touches a byte at or past the end of its buffer.
///
/// One byte at the end of the buffer is reserved for the NUL terminator,
/// which is written by [`BoundedWriter::finish`]. A zero-length buffer is
/// never written to at all.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Constructs a new [`BoundedWriter`] whose capacity is the length of
    /// the given buffer.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// Returns the buffer capacity, terminator slot included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of characters written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns how many more characters fit before the terminator slot.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity().saturating_sub(1).saturating_sub(self.pos)
    }

    /// Appends the given bytes if all of them fit before the terminator slot.
    ///
    /// Otherwise appends the longest prefix that fits, marks the writer as
    /// truncated and returns `false`. Every append after truncation is
    /// refused.
    pub fn try_append(&mut self, bytes: &[u8]) -> bool {
        if self.truncated {
            return false;
        }

        let remaining = self.remaining();
        let (len, fits) = if bytes.len() <= remaining {
            (bytes.len(), true)
        } else {
            (remaining, false)
        };

        self.buf[self.pos..self.pos + len].copy_from_slice(&bytes[..len]);
        self.pos += len;

        if !fits {
            log::trace!(
                "bounded write truncated at {} of {} bytes",
                self.pos,
                self.capacity()
            );
            self.truncated = true;
        }

        fits
    }

    /// Terminates the written text and reports the outcome.
    pub fn finish(self) -> Formatted {
        if let Some(b) = self.buf.get_mut(self.pos) {
            *b = 0;
        }

        if self.truncated || self.buf.is_empty() {
            Formatted::Truncated(self.pos)
        } else {
            Formatted::Complete(self.pos)
        }
    }
}

impl fmt::Write for BoundedWriter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.try_append(s.as_bytes()) {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}
