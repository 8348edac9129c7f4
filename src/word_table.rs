//! Word table decoding
//!
//! Layout of the region from `0x2628` to the end of the file:
//!
//! ```text
//! repeated until the end of the file, one homophone group each:
//!   [2 bytes] homophone count           (i16 LE)
//!   [2 bytes] pinyin index byte length  (i16 LE, even)
//!   [n bytes] pinyin indexes            (i16 LE each)
//!   repeated homophone count times:
//!     [2 bytes] word length  (i16 LE, in bytes)
//!     [m bytes] word         (text)
//!     [2 bytes] ext length   (i16 LE, in bytes)
//!     [k bytes] ext          (opaque)
//! ```

use log::{debug, trace};

use crate::cursor::ByteCursor;
use crate::error::{Result, ScelError};
use crate::pinyin_table::PinyinTable;
use crate::types::{DecodeOptions, WordRecord};

/// Decode every homophone group in the word region
///
/// `base` is the region's file offset. Records come back in file order.
pub fn parse_words(
    region: &[u8],
    base: usize,
    pinyin_table: &PinyinTable,
    options: DecodeOptions,
) -> Result<Vec<WordRecord>> {
    let mut cursor = ByteCursor::new(region, base, options);
    let mut words = Vec::new();
    let mut groups = 0usize;

    while !cursor.at_end() {
        read_homophone_group(&mut cursor, pinyin_table, &mut words)?;
        groups += 1;
    }

    debug!("Word table: {} words in {} homophone groups", words.len(), groups);
    Ok(words)
}

/// Read one homophone group and append its members to `words`
fn read_homophone_group(
    cursor: &mut ByteCursor<'_>,
    pinyin_table: &PinyinTable,
    words: &mut Vec<WordRecord>,
) -> Result<()> {
    let homophone_num = cursor.read_len("homophone count")?;

    let len_offset = cursor.offset();
    let indexes_bytes = cursor.read_len("pinyin index length")?;
    if indexes_bytes % 2 != 0 {
        return Err(ScelError::InvalidLength {
            field: "pinyin index length",
            offset: len_offset,
            value: indexes_bytes as i16,
        });
    }

    let indexes_offset = cursor.offset();
    let indexes = (0..indexes_bytes / 2)
        .map(|_| cursor.read_i16_le())
        .collect::<Result<Vec<i16>>>()?;
    let pinyin = pinyin_table.resolve(&indexes, indexes_offset)?;
    trace!("Homophone group '{}': {} words", pinyin, homophone_num);

    for _ in 0..homophone_num {
        let word_len = cursor.read_len("word length")?;
        let word = cursor.read_string(word_len)?;
        let ext_len = cursor.read_len("ext length")?;
        let ext = cursor.read_bytes(ext_len)?.to_vec();
        words.push(WordRecord {
            word,
            pinyin: pinyin.clone(),
            ext,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    fn group(indexes: &[i16], words: &[(&str, &[u8])]) -> Vec<u8> {
        let mut out = (words.len() as i16).to_le_bytes().to_vec();
        out.extend(((indexes.len() * 2) as i16).to_le_bytes());
        for index in indexes {
            out.extend(index.to_le_bytes());
        }
        for (word, ext) in words {
            let text = utf16le(word);
            out.extend((text.len() as i16).to_le_bytes());
            out.extend(text);
            out.extend((ext.len() as i16).to_le_bytes());
            out.extend_from_slice(ext);
        }
        out
    }

    fn table() -> PinyinTable {
        let mut table = PinyinTable::default();
        table.insert(0, "ni".to_string());
        table.insert(1, "hao".to_string());
        table.insert(2, "shi".to_string());
        table.insert(3, "jie".to_string());
        table
    }

    #[test]
    fn test_single_group() {
        let data = group(&[0, 1], &[("你好", &[0x0a, 0x00])]);
        let words = parse_words(&data, 0x2628, &table(), DecodeOptions::default()).unwrap();
        assert_eq!(
            words,
            vec![WordRecord {
                word: "你好".to_string(),
                pinyin: "ni'hao".to_string(),
                ext: vec![0x0a, 0x00],
            }]
        );
    }

    #[test]
    fn test_groups_keep_file_order() {
        let mut data = group(&[0, 1], &[("你好", &[]), ("拟好", &[0x01])]);
        data.extend(group(&[2, 3], &[("世界", &[0x02, 0x03])]));
        let words = parse_words(&data, 0, &table(), DecodeOptions::default()).unwrap();

        let summary: Vec<(&str, &str)> = words
            .iter()
            .map(|w| (w.word.as_str(), w.pinyin.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![("你好", "ni'hao"), ("拟好", "ni'hao"), ("世界", "shi'jie")]
        );
        assert_eq!(words[1].ext, vec![0x01]);
        assert_eq!(words[2].ext, vec![0x02, 0x03]);
    }

    #[test]
    fn test_empty_region() {
        let words = parse_words(&[], 0x2628, &table(), DecodeOptions::default()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_empty_group() {
        let data = group(&[2], &[]);
        let words = parse_words(&data, 0, &table(), DecodeOptions::default()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_dangling_index() {
        let data = group(&[0, 9], &[("你", &[])]);
        let err = parse_words(&data, 0x2628, &table(), DecodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ScelError::DanglingPinyinIndex { index: 9, offset: 0x262c }
        ));
    }

    #[test]
    fn test_truncated_ext() {
        let mut data = group(&[0], &[("你", &[0x01, 0x02, 0x03])]);
        data.pop();
        let err = parse_words(&data, 0, &table(), DecodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ScelError::TruncatedInput { needed: 3, available: 2, .. }
        ));
    }

    #[test]
    fn test_truncated_group_header() {
        let mut data = group(&[0], &[("你", &[])]);
        data.push(0x01);
        let err = parse_words(&data, 0, &table(), DecodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ScelError::TruncatedInput { needed: 2, available: 1, .. }
        ));
    }

    #[test]
    fn test_missing_homophones() {
        let mut data = group(&[0], &[("你", &[])]);
        // Claim two homophones but supply one.
        data[0] = 0x02;
        assert!(matches!(
            parse_words(&data, 0, &table(), DecodeOptions::default()),
            Err(ScelError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_odd_index_length() {
        let data = [0x01, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00];
        assert!(matches!(
            parse_words(&data, 0x2628, &table(), DecodeOptions::default()),
            Err(ScelError::InvalidLength { field: "pinyin index length", offset: 0x262a, value: 3 })
        ));
    }

    #[test]
    fn test_negative_homophone_count() {
        let data = [0xff, 0xff, 0x02, 0x00, 0x00, 0x00];
        assert!(matches!(
            parse_words(&data, 0, &table(), DecodeOptions::default()),
            Err(ScelError::InvalidLength { field: "homophone count", offset: 0, value: -1 })
        ));
    }
}
