// This is a part of rust-charmap.
// Copyright (c) 2013, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Common codec implementation for single-byte encodings.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;

use tracing::warn;

use crate::types::*;

/// A single-byte encoding driven by a mapping table.
///
/// The decode table is read from the index function once,
/// and the encode table is derived by inverting it.
/// Both are immutable after construction.
///
/// If the index maps two bytes to the same code point,
/// the lowest byte becomes the encoding of that code point
/// and every other byte only decodes to it.
pub struct TableCodec {
    name: &'static str,
    decode_table: [Option<char>; 256],
    encode_table: HashMap<char, u8>,
    ascii_compatible: bool,
}

impl TableCodec {
    /// Builds a codec from an index function,
    /// which returns the code point for each byte or 0xffff if unassigned.
    pub fn new(name: &'static str, index_forward: fn(u8) -> u16) -> TableCodec {
        let mut decode_table = [None; 256];
        let mut encode_table = HashMap::with_capacity(256);

        for byte in 0x00u8..=0xff {
            let code = index_forward(byte);
            if code == 0xffff {
                continue;
            }
            let ch = match char::from_u32(code as u32) {
                Some(ch) => ch,
                None => {
                    warn!(encoding = name, byte, code, "surrogate in mapping table, byte left unassigned");
                    continue;
                }
            };
            decode_table[byte as usize] = Some(ch);
            match encode_table.entry(ch) {
                Entry::Vacant(e) => {
                    e.insert(byte);
                }
                Entry::Occupied(e) => {
                    warn!(encoding = name, code, kept = *e.get(), dropped = byte,
                          "duplicate code point in mapping table");
                }
            }
        }

        let ascii_compatible = (0x00u8..=0x7f).all(|b| decode_table[b as usize] == Some(b as char))
            && decode_table[0x80..].iter().flatten().all(|&ch| ch > '\u{7f}');

        TableCodec { name, decode_table, encode_table, ascii_compatible }
    }

    /// Returns the code point for given byte, if assigned.
    #[inline]
    pub fn decode_byte(&self, byte: u8) -> Option<char> {
        self.decode_table[byte as usize]
    }

    /// Returns the byte for given code point, if representable.
    #[inline]
    pub fn encode_char(&self, ch: char) -> Option<u8> {
        self.encode_table.get(&ch).copied()
    }

    /// Returns the number of code points this encoding can represent.
    pub fn encodable_count(&self) -> usize {
        self.encode_table.len()
    }
}

impl fmt::Debug for TableCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCodec")
            .field("name", &self.name)
            .field("encodable", &self.encode_table.len())
            .finish()
    }
}

impl Codec for TableCodec {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_ascii_compatible(&self) -> bool {
        self.ascii_compatible
    }

    fn decode_into(&self, input: &[u8], output: &mut dyn StringWriter) -> usize {
        output.writer_hint(input.len());
        let mut nsubst = 0;
        for &byte in input {
            match self.decode_table[byte as usize] {
                Some(ch) => output.write_char(ch),
                None => {
                    output.write_char(DECODE_REPLACEMENT);
                    nsubst += 1;
                }
            }
        }
        nsubst
    }

    fn encode_into(
        &self,
        input: &mut dyn Iterator<Item = Option<char>>,
        output: &mut dyn ByteWriter,
    ) -> usize {
        let mut nsubst = 0;
        for ch in input {
            match ch.and_then(|ch| self.encode_table.get(&ch)) {
                Some(&byte) => output.write_byte(byte),
                None => {
                    output.write_byte(ENCODE_REPLACEMENT);
                    nsubst += 1;
                }
            }
        }
        nsubst
    }
}

#[cfg(test)]
mod tests {
    use super::TableCodec;
    use crate::types::*;
    use tracing_test::traced_test;

    // ASCII with 0x80 unassigned, 0x81 mapped to U+0104,
    // and 0xC1 duplicating the code point of 0x41.
    fn contrived_forward(code: u8) -> u16 {
        match code {
            0x80 => 0xffff,
            0x81 => 0x0104,
            0xc1 => 0x0041,
            0xd8 => 0xd800,
            c if c <= 0x7f => c as u16,
            c => 0x0400 + c as u16,
        }
    }

    #[test]
    fn test_decode_table() {
        let codec = TableCodec::new("CONTRIVED", contrived_forward);
        assert_eq!(codec.name(), "CONTRIVED");
        assert_decode_ok!(codec, [0x41, 0x81], "A\u{104}");
        assert_decode_err!(codec, [0x41, 0x80, 0x42], "A\u{fffd}B");
        assert_decode_ok!(codec, [], "");
    }

    #[test]
    fn test_encode_table() {
        let codec = TableCodec::new("CONTRIVED", contrived_forward);
        assert_encode_ok!(codec, "A\u{104}", [0x41, 0x81]);
        assert_encode_err!(codec, "A\u{1e02}B", [0x41, 0x3f, 0x42]);
        assert_encode_ok!(codec, "", []);
    }

    #[test]
    fn test_encoder_non_bmp() {
        let codec = TableCodec::new("CONTRIVED", contrived_forward);
        assert_encode_err!(codec, "A\u{10000}B", [0x41, 0x3f, 0x42]);
        assert_encode_err!(codec, "\u{ffff}", [0x3f]);
    }

    #[test]
    #[traced_test]
    fn test_duplicate_code_point_keeps_lowest_byte() {
        let codec = TableCodec::new("CONTRIVED", contrived_forward);
        assert_eq!(codec.encode_char('A'), Some(0x41));
        assert_eq!(codec.decode_byte(0xc1), Some('A'));
        assert_decode_ok!(codec, [0xc1], "A");
        assert!(!codec.is_ascii_compatible());
        assert!(logs_contain("duplicate code point in mapping table"));
    }

    #[test]
    #[traced_test]
    fn test_surrogate_left_unassigned() {
        let codec = TableCodec::new("CONTRIVED", contrived_forward);
        assert_eq!(codec.decode_byte(0xd8), None);
        assert_decode_err!(codec, [0xd8], "\u{fffd}");
        assert!(logs_contain("surrogate in mapping table"));
    }

    #[test]
    fn test_encodable_count() {
        let codec = TableCodec::new("CONTRIVED", contrived_forward);
        // 0x80 and 0xd8 are unassigned, 0xc1 duplicates 0x41
        assert_eq!(codec.encodable_count(), 256 - 3);
    }

    #[cfg(feature = "iso-8859")]
    mod iso_8859 {
        use super::super::TableCodec;
        use crate::types::*;
        use charmap_index_singlebyte::{iso_8859_14, iso_8859_2, iso_8859_3};

        #[test]
        fn test_same_byte_different_tables() {
            let latin2 = TableCodec::new("ISO-8859-2", iso_8859_2::forward);
            let latin8 = TableCodec::new("ISO-8859-14", iso_8859_14::forward);
            assert_decode_ok!(latin2, [0xa1], "\u{104}");
            assert_decode_ok!(latin8, [0xa1], "\u{1e02}");
            assert!(latin2.is_ascii_compatible());
            assert!(latin8.is_ascii_compatible());
        }

        #[test]
        fn test_unassigned_bytes() {
            let latin3 = TableCodec::new("ISO-8859-3", iso_8859_3::forward);
            assert_decode_err!(latin3, [0x41, 0xa5, 0x42], "A\u{fffd}B");
            assert_decode_ok!(latin3, [0xa6], "\u{124}");
        }

        #[test]
        fn test_every_byte() {
            let latin3 = TableCodec::new("ISO-8859-3", iso_8859_3::forward);
            for byte in 0x00u8..=0xff {
                let (s, err) = latin3.decode(&[byte]);
                assert_eq!(s.chars().count(), 1);
                match latin3.decode_byte(byte) {
                    Some(ch) => {
                        assert_eq!(s.chars().next(), Some(ch));
                        assert_eq!(err, None);
                        assert_eq!(latin3.encode(&s), (vec![byte], None));
                    }
                    None => {
                        assert_eq!(s, "\u{fffd}");
                        assert_eq!(err, Some(Error::InvalidCodepoint));
                    }
                }
            }
        }
    }
}
