//! Error types for the scel library

use thiserror::Error;

use crate::types::Encoding;

/// Custom error type for scel operations
#[derive(Error, Debug)]
pub enum ScelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A field declares more bytes than the input holds.
    #[error("Truncated input at offset {offset:#x}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Invalid pinyin table magic marker at offset {offset:#x}: {found:02x?}")]
    InvalidMagicMarker { offset: usize, found: [u8; 4] },

    #[error("Invalid {encoding:?} text at offset {offset:#x}")]
    InvalidEncoding { offset: usize, encoding: Encoding },

    #[error("Dangling pinyin index {index} at offset {offset:#x}")]
    DanglingPinyinIndex { index: i16, offset: usize },

    #[error("Invalid {field} value {value} at offset {offset:#x}")]
    InvalidLength {
        field: &'static str,
        offset: usize,
        value: i16,
    },
}

/// Result type alias for scel operations
pub type Result<T> = std::result::Result<T, ScelError>;
