//! Configurable limits for header framing.

use crate::header::{MAX_KIND_NAME_LEN, MAX_SIZE_TOKEN_LEN};

/// How the length-token bound is measured when the second delimiter is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeTokenBound {
    /// Compare the whole buffer length against the bound.
    ///
    /// A buffer such as `Display:1` is already longer than five bytes and is
    /// classified as broken even though its length token is one digit.
    #[default]
    BufferLength,
    /// Compare only the bytes after the type delimiter against the bound.
    SinceTypeDelimiter,
}

/// Header limits for packet framing.
///
/// These bound how long the extractor waits for a delimiter before declaring
/// the buffer broken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// Maximum buffer length without a type delimiter.
    pub max_type_len: usize,

    /// Maximum length-token size without a length delimiter.
    pub max_size_len: usize,

    /// How `max_size_len` is measured.
    pub size_bound: SizeTokenBound,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_type_len: MAX_KIND_NAME_LEN,
            max_size_len: MAX_SIZE_TOKEN_LEN,
            size_bound: SizeTokenBound::BufferLength,
        }
    }
}

impl Limits {
    /// Creates the default limits with the length bound measured after the type delimiter.
    #[must_use]
    pub const fn relative() -> Self {
        Self {
            max_type_len: MAX_KIND_NAME_LEN,
            max_size_len: MAX_SIZE_TOKEN_LEN,
            size_bound: SizeTokenBound::SinceTypeDelimiter,
        }
    }

    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_type_len: MAX_KIND_NAME_LEN,
            max_size_len: 3,
            size_bound: SizeTokenBound::SinceTypeDelimiter,
        }
    }
}
