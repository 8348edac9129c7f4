//! Rust implementation of the SCEL cell dictionary parser
//!
//! This library decodes Sogou pinyin input method cell dictionaries
//! (`.scel`) into their metadata and word list.
//!
//! # Example
//! ```no_run
//! use rust_scel::{parse_file, DecodeOptions, MalformedPolicy, ScelParser};
//!
//! // Decode with the default options (UTF-16LE, fail on malformed text)
//! let doc = parse_file("dictionary.scel").unwrap();
//! println!("{}: {} words", doc.name, doc.word_count());
//! for record in doc.words.iter().take(10) {
//!     println!("{} [{}]", record.word, record.pinyin);
//! }
//!
//! // Substitute U+FFFD for malformed text instead of failing
//! let parser = ScelParser::with_options(
//!     DecodeOptions::default().with_malformed_policy(MalformedPolicy::Replace),
//! );
//! let bytes = std::fs::read("dictionary.scel").unwrap();
//! let doc = parser.parse_bytes(&bytes).unwrap();
//! ```

mod error;
mod types;
mod utils;
mod cursor;
mod pinyin_table;
mod word_table;
mod scel;

use std::path::Path;

pub use error::{Result, ScelError};
pub use types::*;
pub use cursor::ByteCursor;
pub use pinyin_table::PinyinTable;
pub use word_table::parse_words;
pub use scel::ScelParser;

/// Decode a SCEL file held in memory with default options
pub fn parse_bytes(buf: &[u8]) -> Result<Document> {
    ScelParser::new().parse_bytes(buf)
}

/// Read and decode a SCEL file with default options
pub fn parse_file<P: AsRef<Path>>(filepath: P) -> Result<Document> {
    ScelParser::new().parse_file(filepath)
}
