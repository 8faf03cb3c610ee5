// This is a part of rust-charmap.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Macros and utilities for testing indices.

/// Makes a common test suite for single-byte indices.
///
/// The calling module should have a `forward(u8) -> u16` function
/// returning 0xffff for unassigned bytes.
#[macro_export]
macro_rules! single_byte_tests {
    () => {
        mod tests {
            use super::forward;

            #[test]
            fn test_correct_table() {
                // the codec derives the encoder by inverting this table,
                // so no code point may be reachable from two bytes.
                let mut seen = ::std::collections::HashMap::new();
                for i in 0x00u8..=0xff {
                    let j = forward(i);
                    if j == 0xffff {
                        continue;
                    }
                    if let Some(prev) = seen.insert(j, i) {
                        panic!("U+{:04X} is mapped from both 0x{:02X} and 0x{:02X}", j, prev, i);
                    }
                }
            }

            #[test]
            fn test_no_surrogates() {
                for i in 0x00u8..=0xff {
                    let j = forward(i);
                    assert!(
                        !(0xd800..=0xdfff).contains(&j),
                        "0x{:02X} is mapped to a surrogate U+{:04X}",
                        i,
                        j
                    );
                }
            }

            // `forward` is total by its type; unassigned bytes are 0xffff,
            // and a legacy code page leaves at most the upper half unassigned.
            #[test]
            fn test_at_least_half_assigned() {
                let assigned = (0x00u8..=0xff).filter(|&i| forward(i) != 0xffff).count();
                assert!(assigned >= 0x80, "only {} bytes are assigned", assigned);
            }
        }
    };
}
