// This is a part of rust-charmap.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# Rust-charmap

Table-driven conversion between legacy single-byte character encodings and Unicode.

Every conversion is best-effort: it always runs to the end of the input,
substitutes anything it cannot map, and reports the substitution
alongside the output instead of discarding the output.

## Simple Usage

To encode a string:

~~~~ {.rust}
# #[cfg(feature = "iso-8859")] {
let (encoded, err) = charmap::encode("caf\u{e9}", "iso-8859-2");
assert_eq!(&encoded[..], &[99, 97, 102, 233]);
assert_eq!(err, None);
# }
~~~~

To encode a string with unrepresentable characters:

~~~~ {.rust}
# #[cfg(feature = "iso-8859")] {
use charmap::Error;

let (encoded, err) = charmap::encode("Acme\u{a9}", "ISO-8859-2");
assert_eq!(&encoded[..], b"Acme?");
assert_eq!(err, Some(Error::InvalidCodepoint));
# }
~~~~

To decode a byte sequence, with or without unassigned bytes:

~~~~ {.rust}
# #[cfg(feature = "iso-8859")] {
use charmap::Error;

let (decoded, err) = charmap::decode(&[0xa1], "ISO-8859-2");
assert_eq!(decoded, "\u{104}");
assert_eq!(err, None);

// same byte, different table
assert_eq!(charmap::decode(&[0xa1], "ISO-8859-14").0, "\u{1e02}");

let (decoded, err) = charmap::decode(&[65, 99, 109, 101, 0xa5], "iso_8859_3");
assert_eq!(decoded, "Acme\u{fffd}");
assert_eq!(err, Some(Error::InvalidCodepoint));
# }
~~~~

An unknown label leaves the input untouched:

~~~~ {.rust}
let (same, err) = charmap::encode("caf\u{e9}", "EBCDIC-FR");
assert_eq!(&same[..], "caf\u{e9}".as_bytes());
assert!(err.unwrap().is_unknown_encoding());
~~~~

## Labels

A label is normalized by uppercasing it and replacing every `_` with `-`,
and then resolved through the aliases of the registered encodings.
`iso_8859_2`, `8859-2`, `ISO8859-2` and `ISO-8859-2` all name the same encoding.
`list_encodings` returns every canonical name.

## Detailed Usage

There are three layers:

* The functions at the crate root (`encode`, `decode`, `encode_to_buffer`,
  `decode_to_buffer` and `list_encodings`) resolve a label through
  the process-wide registry and delegate to the codec.
* **`label::Registry`** maps labels to codecs. The process-wide one is
  available from `registry()` and is built on first use by `all::bootstrap`;
  it is read-only afterwards and can be shared across threads freely.
* **`Codec`** is a single character encoding.
  `codec::singlebyte::TableCodec` implements it with a mapping table
  from the `charmap-index-singlebyte` crate and its derived inverse.

## Supported Encodings

* ISO 8859-{1,2,3,4,5,6,7,8,9,10,11,13,14,15,16} (`iso-8859` feature)
* Windows code pages 874 and 1250 through 1258 (`windows` feature)
* IBM code pages 437, 850, 852 and 866 (`oem` feature)
* KOI8-R, KOI8-U (`koi8` feature)
* MacRoman (`mac` feature)

All of them are enabled by default.
Multi-byte and stateful encodings are not supported.

*/

use std::borrow::Cow;
use std::sync::LazyLock;

use tracing::trace;

pub use self::label::Registry;
pub use self::types::{ByteWriter, Codec, CodecRef, Error, StringWriter}; // reexport

#[cfg(test)]
#[macro_use]
mod testutils;
mod util;

pub mod types;

/// Codec implementations.
pub mod codec {
    pub mod singlebyte;
}

pub mod all;
pub mod label;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    all::bootstrap().unwrap_or_else(|err| panic!("built-in encodings are inconsistent: {}", err))
});

/// Returns the process-wide registry of every supported encoding.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Returns the codec for given label, if any.
pub fn codec_for_label(label: &str) -> Option<CodecRef<'static>> {
    registry().codec_for_label(label)
}

fn unknown_encoding(label: &str) -> Error {
    trace!(label, "no codec registered for label");
    Error::UnknownEncoding { label: label.to_string() }
}

fn trace_substitution(codec: CodecRef<'_>, err: &Option<Error>) {
    if err.is_some() {
        trace!(encoding = codec.name(), "substituted one or more units");
    }
}

/// Converts a string into the specified encoding.
///
/// Unrepresentable characters are replaced with `?`
/// and reported as `Error::InvalidCodepoint`.
/// If the encoding is unknown, returns the input untouched and `Error::UnknownEncoding`.
pub fn encode<'a>(input: &'a str, label: &str) -> (Cow<'a, [u8]>, Option<Error>) {
    match codec_for_label(label) {
        Some(codec) => {
            let (ret, err) = codec.encode(input);
            trace_substitution(codec, &err);
            (Cow::Owned(ret), err)
        }
        None => (Cow::Borrowed(input.as_bytes()), Some(unknown_encoding(label))),
    }
}

/// Converts a byte sequence in the specified encoding into a string.
///
/// Unassigned bytes are replaced with U+FFFD
/// and reported as `Error::InvalidCodepoint`.
/// If the encoding is unknown, returns the input and `Error::UnknownEncoding`;
/// the input is untouched as long as it is valid UTF-8,
/// otherwise malformed sequences are replaced with U+FFFD.
/// Use `decode_to_buffer` to get arbitrary bytes back untouched.
pub fn decode<'a>(input: &'a [u8], label: &str) -> (Cow<'a, str>, Option<Error>) {
    match codec_for_label(label) {
        Some(codec) => {
            let (ret, err) = codec.decode(input);
            trace_substitution(codec, &err);
            (Cow::Owned(ret), err)
        }
        None => (String::from_utf8_lossy(input), Some(unknown_encoding(label))),
    }
}

/// Same as `encode`, but reads the string as UTF-8 from a byte buffer.
///
/// Each malformed UTF-8 sequence counts as one unrepresentable character.
/// If the encoding is unknown, returns a copy of the input and `Error::UnknownEncoding`.
pub fn encode_to_buffer(input: &[u8], label: &str) -> (Vec<u8>, Option<Error>) {
    match codec_for_label(label) {
        Some(codec) => {
            let (ret, err) = codec.encode_to_buffer(input);
            trace_substitution(codec, &err);
            (ret, err)
        }
        None => (input.to_vec(), Some(unknown_encoding(label))),
    }
}

/// Same as `decode`, but writes the string as UTF-8 into a byte buffer.
///
/// If the encoding is unknown, returns a copy of the input and `Error::UnknownEncoding`.
pub fn decode_to_buffer(input: &[u8], label: &str) -> (Vec<u8>, Option<Error>) {
    match codec_for_label(label) {
        Some(codec) => {
            let (ret, err) = codec.decode_to_buffer(input);
            trace_substitution(codec, &err);
            (ret, err)
        }
        None => (input.to_vec(), Some(unknown_encoding(label))),
    }
}

/// Returns the canonical names of all supported encodings, sorted.
pub fn list_encodings() -> Vec<&'static str> {
    registry().list()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_encoding() {
        let text = "Za\u{17c}\u{f3}\u{142}\u{107} g\u{119}\u{15b}l\u{105} ja\u{17a}\u{144}";
        let (ret, err) = encode(text, "NOT-A-REAL-ENCODING");
        assert_eq!(&ret[..], text.as_bytes());
        assert!(matches!(ret, Cow::Borrowed(_)));
        assert_eq!(err, Some(Error::UnknownEncoding { label: "NOT-A-REAL-ENCODING".to_string() }));

        let (ret, err) = decode(text.as_bytes(), "not_a_real_encoding");
        assert_eq!(ret, text);
        assert!(matches!(ret, Cow::Borrowed(_)));
        assert!(err.unwrap().is_unknown_encoding());

        let raw = [0x41, 0xa1, 0xff];
        assert_eq!(encode_to_buffer(&raw, "EBCDIC").0, raw);
        assert_eq!(decode_to_buffer(&raw, "EBCDIC").0, raw);
        assert!(decode_to_buffer(&raw, "EBCDIC").1.unwrap().is_unknown_encoding());
    }

    #[test]
    fn test_empty_label() {
        assert!(codec_for_label("").is_none());
        assert!(encode("abc", "").1.unwrap().is_unknown_encoding());
    }

    #[test]
    fn test_list_consistency() {
        let names = list_encodings();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        for name in names {
            let codec = codec_for_label(name).unwrap();
            assert_eq!(codec.name(), name);
            assert_eq!(encode("abc", name), (Cow::Borrowed(&b"abc"[..]), None));
            assert_eq!(decode(b"abc", name), (Cow::Borrowed("abc"), None));
            assert_eq!(codec_for_label(&name.to_lowercase().replace('-', "_")).map(|c| c.name()),
                       Some(name));
        }
    }

    #[test]
    fn test_total_byte_coverage() {
        for name in list_encodings() {
            for byte in 0x00u8..=0xff {
                let input = [byte];
                let (ret, err) = decode(&input, name);
                assert_eq!(ret.chars().count(), 1, "{} 0x{:02X}", name, byte);
                match err {
                    None => assert!(ret != "\u{fffd}"),
                    Some(err) => {
                        assert_eq!(err, Error::InvalidCodepoint);
                        assert_eq!(ret, "\u{fffd}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_assigned_byte() {
        for name in list_encodings() {
            let bytes: Vec<u8> = (0x00u8..=0xff)
                .filter(|&b| decode(&[b], name).1.is_none())
                .collect();
            let (text, err) = decode(&bytes, name);
            assert_eq!(err, None);
            assert_eq!(encode(&text, name), (Cow::Owned(bytes.clone()), None), "{}", name);
            assert_eq!(encode_to_buffer(text.as_bytes(), name), (bytes.clone(), None));
        }
    }

    #[cfg(feature = "iso-8859")]
    mod iso_8859 {
        use super::super::*;

        #[test]
        fn test_table_independence() {
            assert_eq!(decode(&[0xa1], "ISO-8859-2"), (Cow::Borrowed("\u{104}"), None));
            assert_eq!(decode(&[0xa1], "ISO-8859-14"), (Cow::Borrowed("\u{1e02}"), None));
        }

        #[test]
        fn test_alias_equivalence() {
            let input = b"\xa1\xb1 \xc8e\xb9tina \xff";
            let expected = decode(input, "ISO-8859-2");
            assert_eq!(expected.0, "\u{104}\u{105} \u{10c}e\u{161}tina \u{2d9}");
            for label in ["8859-2", "iso_8859_2", "iso8859_2", "Iso-8859-2", "ISO8859-2"] {
                assert_eq!(decode(input, label), expected, "{}", label);
            }
            assert_eq!(decode_to_buffer(input, "8859_2").0, expected.0.as_bytes());
        }

        #[test]
        fn test_encode_substitution() {
            let (ret, err) = encode("\u{104}\u{a9}\u{1e02}x", "ISO-8859-2");
            assert_eq!(&ret[..], &[0xa1, b'?', b'?', b'x']);
            assert_eq!(err, Some(Error::InvalidCodepoint));

            // malformed UTF-8 is substituted too
            let (ret, err) = encode_to_buffer(b"\xc4\x84\xff\xc4", "ISO-8859-2");
            assert_eq!(ret, [0xa1, b'?', b'?']);
            assert_eq!(err, Some(Error::InvalidCodepoint));
        }

        #[test]
        fn test_decode_substitution() {
            let (ret, err) = decode(b"a\xa5b\xae", "ISO-8859-3");
            assert_eq!(ret, "a\u{fffd}b\u{fffd}");
            assert_eq!(err, Some(Error::InvalidCodepoint));
            let (ret, err) = decode_to_buffer(b"a\xa5b", "iso_8859_3");
            assert_eq!(ret, "a\u{fffd}b".as_bytes());
            assert_eq!(err, Some(Error::InvalidCodepoint));
        }

        #[test]
        fn test_empty_input() {
            assert_eq!(encode("", "ISO-8859-14"), (Cow::Owned(Vec::new()), None));
            assert_eq!(decode(b"", "ISO-8859-14"), (Cow::Owned(String::new()), None));
            assert_eq!(encode_to_buffer(b"", "ISO-8859-14"), (Vec::new(), None));
            assert_eq!(decode_to_buffer(b"", "ISO-8859-14"), (Vec::new(), None));
        }

        #[test]
        fn test_concurrent_use() {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    std::thread::spawn(move || {
                        let label = if i % 2 == 0 { "ISO-8859-2" } else { "8859-14" };
                        decode(&[0xa1; 64], label).0.into_owned()
                    })
                })
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                let ch = if i % 2 == 0 { "\u{104}" } else { "\u{1e02}" };
                assert_eq!(handle.join().unwrap(), ch.repeat(64));
            }
        }
    }

    #[cfg(feature = "iso-8859")]
    mod properties {
        use super::super::*;
        use proptest::prelude::*;
        use proptest::sample::select;

        // characters representable in ISO 8859-2
        fn latin2_text() -> impl Strategy<Value = String> {
            let bytes: Vec<u8> = (0x00u8..=0xff).collect();
            let chars: Vec<char> = decode(&bytes, "ISO-8859-2").0.chars().collect();
            prop::collection::vec(select(chars), 0..64).prop_map(|v| v.into_iter().collect::<String>())
        }

        proptest! {
            #[test]
            fn prop_round_trip(text in latin2_text()) {
                let (bytes, err) = encode(&text, "ISO-8859-2");
                let bytes = bytes.into_owned();
                prop_assert_eq!(err, None);
                prop_assert_eq!(bytes.len(), text.chars().count());
                let (back, err) = decode(&bytes, "ISO-8859-2");
                prop_assert_eq!(err, None);
                prop_assert_eq!(back, &text[..]);
            }

            #[test]
            fn prop_substitution_not_truncation(text in "\\PC{0,64}") {
                let (bytes, err) = encode(&text, "ISO-8859-14");
                prop_assert_eq!(bytes.len(), text.chars().count());
                let nsubst = text.chars()
                    .filter(|&ch| codec_for_label("ISO-8859-14").unwrap().encode(&ch.to_string()).1.is_some())
                    .count();
                prop_assert_eq!(err.is_some(), nsubst > 0);
            }

            #[test]
            fn prop_decode_length(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
                let (text, err) = decode(&bytes, "ISO-8859-3");
                prop_assert_eq!(text.chars().count(), bytes.len());
                prop_assert_eq!(err.is_some(), text.contains('\u{fffd}'));
                prop_assert_eq!(decode_to_buffer(&bytes, "8859-3").0, text.as_bytes());
            }

            #[test]
            fn prop_alias_equivalence(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
                let expected = decode(&bytes, "ISO-8859-2");
                prop_assert_eq!(decode(&bytes, "8859-2"), expected.clone());
                prop_assert_eq!(decode(&bytes, "iso_8859_2"), expected);
            }
        }
    }
}
