//! SCEL document decoding
//!
//! Ties the fixed-offset metadata fields, the pinyin table and the word
//! table together into a [`Document`].

use std::ops::Range;
use std::path::Path;

use log::{debug, info};

use crate::error::{Result, ScelError};
use crate::pinyin_table::PinyinTable;
use crate::types::*;
use crate::utils::decode_padded_string;
use crate::word_table::parse_words;

/// SCEL cell dictionary parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ScelParser {
    options: DecodeOptions,
}

impl ScelParser {
    /// Create a parser with default options (UTF-16LE, fail on malformed text)
    pub fn new() -> Self {
        ScelParser::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        ScelParser { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a whole SCEL file held in memory
    pub fn parse_bytes(&self, buf: &[u8]) -> Result<Document> {
        info!("Parsing SCEL buffer ({} bytes)", buf.len());

        if buf.len() < WORD_TABLE_OFFSET {
            return Err(ScelError::TruncatedInput {
                offset: 0,
                needed: WORD_TABLE_OFFSET,
                available: buf.len(),
            });
        }

        let name = self.read_field(buf, NAME_RANGE)?;
        let dict_type = self.read_field(buf, TYPE_RANGE)?;
        let description = self.read_field(buf, DESCRIPTION_RANGE)?;
        let example = self.read_field(buf, EXAMPLE_RANGE)?;
        debug!("Dictionary name: {:?}, type: {:?}", name, dict_type);

        let pinyin_table = PinyinTable::parse(
            &buf[PINYIN_TABLE_RANGE],
            PINYIN_TABLE_RANGE.start,
            self.options,
        )?;
        let words = parse_words(
            &buf[WORD_TABLE_OFFSET..],
            WORD_TABLE_OFFSET,
            &pinyin_table,
            self.options,
        )?;

        info!("Parsed SCEL dictionary {:?}: {} words", name, words.len());
        Ok(Document {
            name,
            dict_type,
            description,
            example,
            words,
        })
    }

    /// Read a SCEL file from disk and decode it
    pub fn parse_file<P: AsRef<Path>>(&self, filepath: P) -> Result<Document> {
        let path = filepath.as_ref();
        debug!("Reading SCEL file {}", path.display());
        let buf = std::fs::read(path)?;
        self.parse_bytes(&buf)
    }

    /// Decode a null-padded metadata field
    fn read_field(&self, buf: &[u8], range: Range<usize>) -> Result<String> {
        let start = range.start;
        decode_padded_string(&buf[range], &self.options, start)
    }
}
