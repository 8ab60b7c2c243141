//! Field cursor with bounded reads.

use crate::error::{CursorError, CursorResult};
use crate::width::FieldWidth;

/// A sequential reader of big-endian unsigned fields over a fixed slice.
///
/// All reads are bounds-checked and return errors on failure.
/// The cursor never panics on malformed input.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    width: FieldWidth,
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new `ByteCursor` over `data` reading `width`-byte fields.
    #[must_use]
    pub const fn new(data: &'a [u8], width: FieldWidth) -> Self {
        Self {
            data,
            width,
            pos: 0,
        }
    }

    /// Returns the configured field width.
    #[must_use]
    pub const fn width(&self) -> FieldWidth {
        self.width
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Returns the number of whole fields remaining to read.
    #[must_use]
    pub const fn fields_remaining(&self) -> usize {
        self.remaining() / self.width.bytes()
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the current byte position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Reads one field and advances by the field width.
    pub fn pop(&mut self) -> CursorResult<u32> {
        let n = self.width.bytes();
        let available = self.remaining();
        if n > available {
            return Err(CursorError::OutOfBounds {
                requested: n,
                available,
            });
        }
        let value = self.data[self.pos..self.pos + n]
            .iter()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
        self.pos += n;
        Ok(value)
    }

    /// Reads one field that must fit in a byte.
    ///
    /// Wider cursors may carry values above 255; those are rejected.
    pub fn pop_u8(&mut self) -> CursorResult<u8> {
        let value = self.pop()?;
        u8::try_from(value).map_err(|_| CursorError::ValueOutOfRange { value, width: 1 })
    }

    /// Reads one field that must fit in two bytes.
    pub fn pop_u16(&mut self) -> CursorResult<u16> {
        let value = self.pop()?;
        u16::try_from(value).map_err(|_| CursorError::ValueOutOfRange { value, width: 2 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor() {
        let cursor = ByteCursor::new(&[], FieldWidth::U8);
        assert!(cursor.is_empty());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn pop_from_empty_fails() {
        let mut cursor = ByteCursor::new(&[], FieldWidth::U8);
        let result = cursor.pop();
        assert!(matches!(
            result,
            Err(CursorError::OutOfBounds {
                requested: 1,
                available: 0
            })
        ));
    }

    #[test]
    fn pop_u8_sequence() {
        let mut cursor = ByteCursor::new(&[3, 2, 1], FieldWidth::U8);
        assert_eq!(cursor.pop().unwrap(), 3);
        assert_eq!(cursor.pop().unwrap(), 2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.pop().unwrap(), 1);
        assert!(cursor.is_empty());
    }

    #[test]
    fn pop_u16_is_big_endian() {
        let mut cursor = ByteCursor::new(&[0x12, 0x34, 0x00, 0x05], FieldWidth::U16);
        assert_eq!(cursor.pop().unwrap(), 0x1234);
        assert_eq!(cursor.pop().unwrap(), 5);
    }

    #[test]
    fn pop_u32_is_big_endian() {
        let mut cursor = ByteCursor::new(&[0x12, 0x34, 0x56, 0x78], FieldWidth::U32);
        assert_eq!(cursor.pop().unwrap(), 0x1234_5678);
    }

    #[test]
    fn partial_field_is_out_of_bounds() {
        let mut cursor = ByteCursor::new(&[0x00, 0x01, 0x02], FieldWidth::U16);
        assert_eq!(cursor.fields_remaining(), 1);
        assert_eq!(cursor.pop().unwrap(), 1);
        let err = cursor.pop().unwrap_err();
        assert_eq!(
            err,
            CursorError::OutOfBounds {
                requested: 2,
                available: 1
            }
        );
        // Failed reads leave the position untouched.
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn pop_u8_rejects_wide_values() {
        let mut cursor = ByteCursor::new(&[0x01, 0x00, 0x00, 0xFF], FieldWidth::U16);
        let err = cursor.pop_u8().unwrap_err();
        assert!(matches!(err, CursorError::ValueOutOfRange { value: 256, .. }));
        assert_eq!(cursor.pop_u8().unwrap(), 255);
    }

    #[test]
    fn pop_u16_from_u32_field() {
        let mut cursor = ByteCursor::new(&[0, 0, 0x01, 0x02, 0, 1, 0, 0], FieldWidth::U32);
        assert_eq!(cursor.pop_u16().unwrap(), 0x0102);
        assert!(cursor.pop_u16().is_err());
    }
}
