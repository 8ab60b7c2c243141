//! Field writer for encoding packet content.

use crate::error::{CursorError, CursorResult};
use crate::width::FieldWidth;

/// A writer that appends big-endian fields of a fixed width.
///
/// Writes are accumulated in an internal buffer. Call [`finish`](Self::finish)
/// to get the final byte buffer.
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    bytes: Vec<u8>,
    width: FieldWidth,
}

impl ByteWriter {
    /// Creates a new empty `ByteWriter`.
    #[must_use]
    pub const fn new(width: FieldWidth) -> Self {
        Self {
            bytes: Vec::new(),
            width,
        }
    }

    /// Creates a new `ByteWriter` with room for `fields` fields.
    #[must_use]
    pub fn with_capacity(width: FieldWidth, fields: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(fields.saturating_mul(width.bytes())),
            width,
        }
    }

    /// Returns the configured field width.
    #[must_use]
    pub const fn width(&self) -> FieldWidth {
        self.width
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends one field.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::ValueOutOfRange`] if `value` doesn't fit in the field width.
    pub fn push(&mut self, value: u32) -> CursorResult<()> {
        if value > self.width.max_value() {
            return Err(CursorError::ValueOutOfRange {
                value,
                width: self.width.bytes(),
            });
        }
        let be = value.to_be_bytes();
        self.bytes.extend_from_slice(&be[4 - self.width.bytes()..]);
        Ok(())
    }

    /// Appends every value in `values`.
    pub fn extend<I>(&mut self, values: I) -> CursorResult<()>
    where
        I: IntoIterator,
        I::Item: Into<u32>,
    {
        for value in values {
            self.push(value.into())?;
        }
        Ok(())
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
