//! Pinyin index table
//!
//! Layout of the region at `0x1540..0x2628`:
//!
//! ```text
//! [4 bytes] magic 9D 01 00 00
//! repeated until the end of the region:
//!   [2 bytes] index       (i16 LE)
//!   [2 bytes] length      (i16 LE, in bytes)
//!   [length]  syllable    (text)
//! ```

use std::collections::HashMap;

use log::{debug, trace};

use crate::cursor::ByteCursor;
use crate::error::{Result, ScelError};
use crate::types::{DecodeOptions, PINYIN_SEPARATOR, PINYIN_TABLE_MAGIC};

/// Mapping from pinyin index to syllable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinyinTable {
    syllables: HashMap<i16, String>,
}

impl PinyinTable {
    /// Decode the table region; `base` is the region's file offset
    pub fn parse(region: &[u8], base: usize, options: DecodeOptions) -> Result<Self> {
        let mut cursor = ByteCursor::new(region, base, options);

        let magic_offset = cursor.offset();
        let magic = cursor.read_bytes(PINYIN_TABLE_MAGIC.len())?;
        if magic != &PINYIN_TABLE_MAGIC[..] {
            let mut found = [0u8; 4];
            found.copy_from_slice(magic);
            return Err(ScelError::InvalidMagicMarker {
                offset: magic_offset,
                found,
            });
        }

        let mut table = PinyinTable::default();
        while !cursor.at_end() {
            let index = cursor.read_i16_le()?;
            let len = cursor.read_len("pinyin length")?;
            let syllable = cursor.read_string(len)?;
            trace!("Pinyin {} -> {}", index, syllable);
            table.insert(index, syllable);
        }

        debug!("Pinyin table: {} syllables", table.len());
        Ok(table)
    }

    /// Insert a syllable, replacing any previous one at `index`
    pub fn insert(&mut self, index: i16, syllable: String) {
        self.syllables.insert(index, syllable);
    }

    pub fn get(&self, index: i16) -> Option<&str> {
        self.syllables.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Iterate over `(index, syllable)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (i16, &str)> {
        self.syllables.iter().map(|(&i, s)| (i, s.as_str()))
    }

    /// Join the syllables for `indexes` into a compound pronunciation
    ///
    /// `offset` locates the index list and is reported with `DanglingPinyinIndex`.
    pub fn resolve(&self, indexes: &[i16], offset: usize) -> Result<String> {
        let mut pinyin = String::new();
        for (i, &index) in indexes.iter().enumerate() {
            let syllable = self
                .get(index)
                .ok_or(ScelError::DanglingPinyinIndex { index, offset })?;
            if i > 0 {
                pinyin.push(PINYIN_SEPARATOR);
            }
            pinyin.push_str(syllable);
        }
        Ok(pinyin)
    }
}
