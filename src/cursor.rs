//! Forward-only cursor over a byte slice
//!
//! All reads are bounds-checked and advance the position by exactly the
//! number of bytes consumed. Offsets in errors are absolute: a cursor built
//! over a sub-region of the file carries the region's start as its base.

use crate::error::{Result, ScelError};
use crate::types::DecodeOptions;
use crate::utils::decode_string;

/// Byte cursor with little-endian primitives
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
    options: DecodeOptions,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor over `data`, whose first byte sits at file offset `base`
    pub fn new(data: &'a [u8], base: usize, options: DecodeOptions) -> Self {
        ByteCursor {
            data,
            pos: 0,
            base,
            options,
        }
    }

    /// Absolute file offset of the next read
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Remaining unread length
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// True once the whole slice has been consumed
    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read exactly `len` bytes as a view into the underlying data
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(ScelError::TruncatedInput {
                offset: self.offset(),
                needed: len,
                available,
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read little-endian i16
    pub fn read_i16_le(&mut self) -> Result<i16> {
        let b = self.read_bytes(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    /// Read a little-endian i16 that must be a non-negative length or count
    pub fn read_len(&mut self, field: &'static str) -> Result<usize> {
        let offset = self.offset();
        let value = self.read_i16_le()?;
        usize::try_from(value).map_err(|_| ScelError::InvalidLength {
            field,
            offset,
            value,
        })
    }

    /// Read `len` bytes and decode them with the configured encoding
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        let offset = self.offset();
        let bytes = self.read_bytes(len)?;
        decode_string(bytes, &self.options, offset)
    }
}
