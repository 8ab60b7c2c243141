//! Field widths supported by the cursor.

/// Width in bytes of every field a cursor reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldWidth {
    /// One byte per field (the primary protocol layout).
    #[default]
    U8,
    /// Two bytes per field, big-endian.
    U16,
    /// Four bytes per field, big-endian.
    U32,
}

impl FieldWidth {
    /// Returns the number of bytes a single field occupies.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Returns the largest value representable in one field.
    #[must_use]
    pub const fn max_value(self) -> u32 {
        match self {
            Self::U8 => u8::MAX as u32,
            Self::U16 => u16::MAX as u32,
            Self::U32 => u32::MAX,
        }
    }

    /// Parses a width from its byte count.
    #[must_use]
    pub const fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            1 => Some(Self::U8),
            2 => Some(Self::U16),
            4 => Some(Self::U32),
            _ => None,
        }
    }
}
