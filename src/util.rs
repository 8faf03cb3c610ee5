// This is a part of rust-charmap.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Internal utilities.

use std::str;

/// External iterator over the characters of a possibly malformed UTF-8 buffer.
///
/// Yields `Some(ch)` for each well-formed character and `None`
/// for each maximal invalid subpart (as `str::Utf8Error::error_len` defines it).
/// A truncated sequence at the end of the buffer yields a single `None`.
pub struct Utf8Chars<'r> {
    valid: str::Chars<'r>,
    rest: &'r [u8],
}

impl<'r> Utf8Chars<'r> {
    pub fn new(input: &'r [u8]) -> Utf8Chars<'r> {
        let mut iter = Utf8Chars { valid: "".chars(), rest: input };
        iter.advance();
        iter
    }

    /// Moves the longest valid prefix of `rest` into `valid`.
    /// Leaves `rest` starting with an invalid sequence, if any.
    fn advance(&mut self) {
        let (valid, rest) = match str::from_utf8(self.rest) {
            Ok(s) => (s, &self.rest[self.rest.len()..]),
            Err(e) => {
                let (valid, rest) = self.rest.split_at(e.valid_up_to());
                // `valid_up_to` guarantees the prefix is well-formed
                (str::from_utf8(valid).unwrap_or_default(), rest)
            }
        };
        self.valid = valid.chars();
        self.rest = rest;
    }

    /// Skips one maximal invalid subpart at the start of `rest`.
    fn skip_invalid(&mut self) {
        let len = match str::from_utf8(self.rest) {
            Err(e) if e.valid_up_to() == 0 => e.error_len().unwrap_or(self.rest.len()),
            _ => 0,
        };
        self.rest = &self.rest[len..];
    }
}

impl<'r> Iterator for Utf8Chars<'r> {
    type Item = Option<char>;

    #[inline]
    fn next(&mut self) -> Option<Option<char>> {
        if let Some(ch) = self.valid.next() {
            return Some(Some(ch));
        }
        if self.rest.is_empty() {
            return None;
        }
        self.skip_invalid();
        self.advance();
        Some(None)
    }
}

#[cfg(test)]
mod tests {
    use super::Utf8Chars;

    fn collect(input: &[u8]) -> Vec<Option<char>> {
        Utf8Chars::new(input).collect()
    }

    #[test]
    fn test_well_formed() {
        assert_eq!(collect(b""), vec![]);
        assert_eq!(collect("a\u{104}\u{1e02}".as_bytes()),
                   vec![Some('a'), Some('\u{104}'), Some('\u{1e02}')]);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(collect(b"\xff"), vec![None]);
        assert_eq!(collect(b"a\x80\x80b"), vec![Some('a'), None, None, Some('b')]);
        // an incomplete three-byte sequence is a single maximal subpart
        assert_eq!(collect(b"a\xe2\x82b"), vec![Some('a'), None, Some('b')]);
        assert_eq!(collect(b"a\xe2\x82"), vec![Some('a'), None]);
        // surrogates are never well-formed
        assert_eq!(collect(b"\xed\xa0\x80"), vec![None, None, None]);
    }
}
