// This is a part of rust-charmap.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Interface to the character encoding.
 *
 * # Substitution
 *
 * Every conversion in this crate runs to the end of its input.
 * A unit without a mapping never aborts the conversion;
 * it is substituted by a fixed placeholder and the conversion keeps going:
 *
 * - **Decoding** substitutes U+FFFD REPLACEMENT CHARACTER for an unassigned byte.
 * - **Encoding** substitutes `?` (0x3F) for an unrepresentable code point.
 *
 * Any substitution is summarized by a single `Error::InvalidCodepoint`
 * returned alongside the (complete) output.
 * The error does not tell which units were substituted.
 */

use std::fmt::Debug;

/// The byte emitted in place of an unrepresentable code point.
pub const ENCODE_REPLACEMENT: u8 = b'?';

/// The character emitted in place of an unassigned byte.
pub const DECODE_REPLACEMENT: char = '\u{fffd}';

/// Error returned alongside the output of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No codec is registered under the resolved label.
    /// The conversion returned its input untouched.
    #[error("encoding is not supported: {label}")]
    UnknownEncoding {
        /// The label as given by the caller.
        label: String,
    },
    /// One or more units had no mapping and were substituted.
    #[error("cannot convert one or more codepoints")]
    InvalidCodepoint,
}

impl Error {
    /// Returns true if this is an `UnknownEncoding` error.
    pub fn is_unknown_encoding(&self) -> bool {
        matches!(*self, Error::UnknownEncoding { .. })
    }

    /// Returns true if this is an `InvalidCodepoint` error.
    pub fn is_invalid_codepoint(&self) -> bool {
        matches!(*self, Error::InvalidCodepoint)
    }
}

/// Byte writer used by encoders. In most cases this will be an owned vector of `u8`.
pub trait ByteWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`,
    /// so that the writer can reserve the memory for writing.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single byte.
    fn write_byte(&mut self, b: u8);

    /// Writes a number of bytes.
    fn write_bytes(&mut self, v: &[u8]);
}

impl ByteWriter for Vec<u8> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    fn write_bytes(&mut self, v: &[u8]) {
        self.extend_from_slice(v);
    }
}

/// String writer used by decoders.
/// This is either an owned string or a byte buffer receiving UTF-8.
pub trait StringWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`,
    /// so that the writer can reserve the memory for writing.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single character.
    fn write_char(&mut self, c: char);

    /// Writes a string.
    fn write_str(&mut self, s: &str);
}

impl StringWriter for String {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_char(&mut self, c: char) {
        self.push(c);
    }

    fn write_str(&mut self, s: &str) {
        self.push_str(s);
    }
}

impl StringWriter for Vec<u8> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }
}

/// A trait object using dynamic dispatch which is a sendable reference to the codec,
/// for code where the encoding is not known at compile-time.
pub type CodecRef<'a> = &'a (dyn Codec + Send + Sync);

/// Character encoding.
///
/// All conversions are best-effort: they always process the whole input
/// and report `Error::InvalidCodepoint` if anything had to be substituted.
pub trait Codec: Debug {
    /// Returns the canonical name of given encoding.
    fn name(&self) -> &'static str;

    /// Returns true if this encoding is compatible to ASCII,
    /// i.e. bytes 00 through 7F always map to U+0000 through U+007F and nothing else.
    fn is_ascii_compatible(&self) -> bool {
        false
    }

    /// Decodes given bytes into `output`.
    /// Returns the number of substituted bytes.
    fn decode_into(&self, input: &[u8], output: &mut dyn StringWriter) -> usize;

    /// Encodes given characters into `output`.
    /// `None` stands for a malformed input unit which cannot be a character at all.
    /// Returns the number of substituted units.
    fn encode_into(
        &self,
        input: &mut dyn Iterator<Item = Option<char>>,
        output: &mut dyn ByteWriter,
    ) -> usize;

    /// Converts a Unicode string into a byte sequence.
    fn encode(&self, input: &str) -> (Vec<u8>, Option<Error>) {
        let mut ret = Vec::new();
        ByteWriter::writer_hint(&mut ret, input.len());
        let nsubst = self.encode_into(&mut input.chars().map(Some), &mut ret);
        (ret, substitution_error(nsubst))
    }

    /// Converts a byte sequence into a Unicode string.
    fn decode(&self, input: &[u8]) -> (String, Option<Error>) {
        let mut ret = String::new();
        let nsubst = self.decode_into(input, &mut ret);
        (ret, substitution_error(nsubst))
    }

    /// Same as `encode`, but reads UTF-8 from a raw byte buffer.
    /// Each malformed UTF-8 sequence is substituted as a single unit.
    fn encode_to_buffer(&self, input: &[u8]) -> (Vec<u8>, Option<Error>) {
        let mut ret = Vec::new();
        ByteWriter::writer_hint(&mut ret, input.len());
        let nsubst = self.encode_into(&mut crate::util::Utf8Chars::new(input), &mut ret);
        (ret, substitution_error(nsubst))
    }

    /// Same as `decode`, but writes UTF-8 into a raw byte buffer.
    fn decode_to_buffer(&self, input: &[u8]) -> (Vec<u8>, Option<Error>) {
        let mut ret = Vec::new();
        let nsubst = self.decode_into(input, &mut ret);
        (ret, substitution_error(nsubst))
    }
}

fn substitution_error(nsubst: usize) -> Option<Error> {
    if nsubst > 0 {
        Some(Error::InvalidCodepoint)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a contrived codec: identity on ASCII, but prohibits `prohibit` in both directions.
    #[derive(Debug)]
    struct MyCodec {
        prohibit: char,
    }

    impl Codec for MyCodec {
        fn name(&self) -> &'static str {
            "MY-CODEC"
        }

        fn decode_into(&self, input: &[u8], output: &mut dyn StringWriter) -> usize {
            let mut nsubst = 0;
            for &b in input {
                let ch = b as char;
                if b <= 0x7f && ch != self.prohibit {
                    output.write_char(ch);
                } else {
                    output.write_char(DECODE_REPLACEMENT);
                    nsubst += 1;
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
                match ch {
                    Some(ch) if ch <= '\u{7f}' && ch != self.prohibit => output.write_byte(ch as u8),
                    _ => {
                        output.write_byte(ENCODE_REPLACEMENT);
                        nsubst += 1;
                    }
                }
            }
            nsubst
        }
    }

    static MY: MyCodec = MyCodec { prohibit: '&' };

    #[test]
    fn test_encode_substitutes_and_continues() {
        assert_eq!(MY.encode("a&b\u{203d}c"), (b"a?b?c".to_vec(), Some(Error::InvalidCodepoint)));
        assert_eq!(MY.encode("abc"), (b"abc".to_vec(), None));
        assert_eq!(MY.encode(""), (Vec::new(), None));
    }

    #[test]
    fn test_decode_substitutes_and_continues() {
        assert_eq!(
            MY.decode(b"a&b\xffc"),
            ("a\u{fffd}b\u{fffd}c".to_string(), Some(Error::InvalidCodepoint))
        );
        assert_eq!(MY.decode(b""), (String::new(), None));
    }

    #[test]
    fn test_buffer_variants_match() {
        assert_eq!(
            MY.decode_to_buffer(b"a&b"),
            ("a\u{fffd}b".as_bytes().to_vec(), Some(Error::InvalidCodepoint))
        );
        assert_eq!(MY.encode_to_buffer("a\u{203d}b".as_bytes()), MY.encode("a\u{203d}b"));
        // a lone continuation byte and a truncated sequence, one `?` each
        assert_eq!(
            MY.encode_to_buffer(b"a\x80b\xe2\x80"),
            (b"a?b?".to_vec(), Some(Error::InvalidCodepoint))
        );
    }

    #[test]
    fn test_string_writer_for_bytes() {
        let mut buf = Vec::new();
        StringWriter::write_char(&mut buf, '\u{104}');
        StringWriter::write_str(&mut buf, "ab");
        assert_eq!(buf, "\u{104}ab".as_bytes());
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnknownEncoding { label: "EBCDIC".to_string() };
        assert_eq!(err.to_string(), "encoding is not supported: EBCDIC");
        assert!(err.is_unknown_encoding());
        assert_eq!(Error::InvalidCodepoint.to_string(), "cannot convert one or more codepoints");
        assert!(Error::InvalidCodepoint.is_invalid_codepoint());
    }
}
