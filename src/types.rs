//! Core data types for scel parsing

use std::ops::Range;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Byte range of the dictionary name field
pub const NAME_RANGE: Range<usize> = 0x130..0x338;
/// Byte range of the dictionary type field
pub const TYPE_RANGE: Range<usize> = 0x338..0x554;
/// Byte range of the description field (overlaps the tail of the type field)
pub const DESCRIPTION_RANGE: Range<usize> = 0x540..0xd40;
/// Byte range of the example field
pub const EXAMPLE_RANGE: Range<usize> = 0xd40..0x1540;
/// Byte range of the pinyin table
pub const PINYIN_TABLE_RANGE: Range<usize> = 0x1540..0x2628;
/// Offset where the word region starts; also the minimum file size
pub const WORD_TABLE_OFFSET: usize = 0x2628;

/// Marker at the head of the pinyin table
pub const PINYIN_TABLE_MAGIC: [u8; 4] = [0x9d, 0x01, 0x00, 0x00];

/// Separator between syllables of a compound pronunciation
pub const PINYIN_SEPARATOR: char = '\'';

/// Text encoding of string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf16Le,
    Utf16Be,
    Gb18030,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Utf16Le
    }
}

impl Encoding {
    /// Width in bytes of the unit used for null termination
    pub fn unit_width(&self) -> usize {
        match self {
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Gb18030 => 1,
        }
    }

    pub(crate) fn as_encoding_rs(&self) -> &'static encoding_rs::Encoding {
        match self {
            Encoding::Utf16Le => encoding_rs::UTF_16LE,
            Encoding::Utf16Be => encoding_rs::UTF_16BE,
            Encoding::Gb18030 => encoding_rs::GB18030,
        }
    }
}

/// What to do with byte sequences that are not valid in the configured encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Fail the decode with `ScelError::InvalidEncoding`
    #[default]
    Fail,
    /// Substitute U+FFFD and continue
    Replace,
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub encoding: Encoding,
    pub on_malformed: MalformedPolicy,
}

impl DecodeOptions {
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }
}

/// One word entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// Word text
    pub word: String,
    /// Syllables joined by apostrophes, e.g. `ni'hao`
    pub pinyin: String,
    /// Opaque extension payload
    pub ext: Vec<u8>,
}

impl WordRecord {
    /// Extension payload as base64
    pub fn ext_base64(&self) -> String {
        BASE64.encode(&self.ext)
    }
}

/// Decoded cell dictionary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub name: String,
    pub dict_type: String,
    pub description: String,
    pub example: String,
    /// Words in file order
    pub words: Vec<WordRecord>,
}

impl Document {
    /// Get total number of words
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get all words pronounced as `pinyin`
    pub fn words_with_pinyin<'a>(&'a self, pinyin: &'a str) -> impl Iterator<Item = &'a WordRecord> {
        self.words.iter().filter(move |w| w.pinyin == pinyin)
    }
}
