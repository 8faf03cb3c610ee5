// This is a part of rust-charmap.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! Single-byte index tables for
//! [rust-charmap](https://github.com/lifthrasiir/rust-charmap).
//!
//! Every module exposes a single `forward` function
//! mapping a byte to its Unicode code point (or 0xffff if unassigned).
//! The reverse direction is derived by the codec.

#[cfg(test)]
#[macro_use]
extern crate charmap_index_tests;

/// ISO 8859-1.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_1;

/// ISO 8859-2.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_2;

/// ISO 8859-3.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_3;

/// ISO 8859-4.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_4;

/// ISO 8859-5.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_5;

/// ISO 8859-6.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_6;

/// ISO 8859-7.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_7;

/// ISO 8859-8 (either visual or logical).
#[cfg(feature = "iso-8859")]
pub mod iso_8859_8;

/// ISO 8859-9.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_9;

/// ISO 8859-10.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_10;

/// ISO 8859-11.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_11;

/// ISO 8859-13.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_13;

/// ISO 8859-14.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_14;

/// ISO 8859-15.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_15;

/// ISO 8859-16.
#[cfg(feature = "iso-8859")]
pub mod iso_8859_16;

/// KOI8-R.
#[cfg(feature = "koi8")]
pub mod koi8_r;

/// KOI8-U.
#[cfg(feature = "koi8")]
pub mod koi8_u;

/// Windows code page 874.
#[cfg(feature = "windows")]
pub mod windows_874;

/// Windows code page 1250.
#[cfg(feature = "windows")]
pub mod windows_1250;

/// Windows code page 1251.
#[cfg(feature = "windows")]
pub mod windows_1251;

/// Windows code page 1252.
#[cfg(feature = "windows")]
pub mod windows_1252;

/// Windows code page 1253.
#[cfg(feature = "windows")]
pub mod windows_1253;

/// Windows code page 1254.
#[cfg(feature = "windows")]
pub mod windows_1254;

/// Windows code page 1255.
#[cfg(feature = "windows")]
pub mod windows_1255;

/// Windows code page 1256.
#[cfg(feature = "windows")]
pub mod windows_1256;

/// Windows code page 1257.
#[cfg(feature = "windows")]
pub mod windows_1257;

/// Windows code page 1258.
#[cfg(feature = "windows")]
pub mod windows_1258;

/// IBM code page 437.
#[cfg(feature = "oem")]
pub mod cp437;

/// IBM code page 850.
#[cfg(feature = "oem")]
pub mod cp850;

/// IBM code page 852.
#[cfg(feature = "oem")]
pub mod cp852;

/// IBM code page 866.
#[cfg(feature = "oem")]
pub mod cp866;

/// MacRoman.
#[cfg(feature = "mac")]
pub mod macintosh;
