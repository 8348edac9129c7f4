//! Utility functions for scel parsing

use crate::error::{Result, ScelError};
use crate::types::{DecodeOptions, MalformedPolicy};

/// Decode bytes to string based on encoding
///
/// BOM sniffing is disabled: the field encoding is fixed by `options`, so a
/// leading `FF FE` is treated as text. `offset` is only used for error context.
pub fn decode_string(bytes: &[u8], options: &DecodeOptions, offset: usize) -> Result<String> {
    let (result, had_errors) = options
        .encoding
        .as_encoding_rs()
        .decode_without_bom_handling(bytes);
    if had_errors && options.on_malformed == MalformedPolicy::Fail {
        return Err(ScelError::InvalidEncoding {
            offset,
            encoding: options.encoding,
        });
    }
    Ok(result.into_owned())
}

/// Length in bytes of `bytes` up to the first null code unit
pub fn null_terminated_len(bytes: &[u8], unit_width: usize) -> usize {
    bytes
        .chunks_exact(unit_width)
        .position(|unit| unit.iter().all(|&b| b == 0))
        .map(|units| units * unit_width)
        .unwrap_or(bytes.len() - bytes.len() % unit_width)
}

/// Decode a fixed-size, null-padded field
pub fn decode_padded_string(bytes: &[u8], options: &DecodeOptions, offset: usize) -> Result<String> {
    let len = null_terminated_len(bytes, options.encoding.unit_width());
    decode_string(&bytes[..len], options, offset)
}
