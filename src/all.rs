// This is a part of rust-charmap.
// Copyright (c) 2013, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A list of all supported encodings, and the bootstrap building a registry out of them.
//!
//! Each encoding family can be left out with its Cargo feature
//! (`iso-8859`, `windows`, `oem`, `koi8` and `mac`, all enabled by default).

#[allow(unused_imports)]
use charmap_index_singlebyte as index;
use tracing::debug;

#[allow(unused_imports)]
use crate::codec::singlebyte::TableCodec;
#[allow(unused_imports)]
use crate::label::RegistryBuilder;
use crate::label::{Registry, RegistryError};

#[allow(unused_macros)]
macro_rules! singlebyte(
    ($builder:expr, mod=$module:ident, name=$name:expr, aliases=[$($alias:expr),*]) => (
        $builder.register(TableCodec::new($name, index::$module::forward), $name, &[$($alias),*])?
    )
);

#[cfg(feature = "iso-8859")]
fn register_iso_8859(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    singlebyte!(builder, mod=iso_8859_1, name="ISO-8859-1", aliases=["8859-1", "ISO8859-1"]);
    singlebyte!(builder, mod=iso_8859_2, name="ISO-8859-2", aliases=["8859-2", "ISO8859-2"]);
    singlebyte!(builder, mod=iso_8859_3, name="ISO-8859-3", aliases=["8859-3", "ISO8859-3"]);
    singlebyte!(builder, mod=iso_8859_4, name="ISO-8859-4", aliases=["8859-4", "ISO8859-4"]);
    singlebyte!(builder, mod=iso_8859_5, name="ISO-8859-5", aliases=["8859-5", "ISO8859-5"]);
    singlebyte!(builder, mod=iso_8859_6, name="ISO-8859-6", aliases=["8859-6", "ISO8859-6"]);
    singlebyte!(builder, mod=iso_8859_7, name="ISO-8859-7", aliases=["8859-7", "ISO8859-7"]);
    singlebyte!(builder, mod=iso_8859_8, name="ISO-8859-8", aliases=["8859-8", "ISO8859-8"]);
    singlebyte!(builder, mod=iso_8859_9, name="ISO-8859-9", aliases=["8859-9", "ISO8859-9"]);
    singlebyte!(builder, mod=iso_8859_10, name="ISO-8859-10", aliases=["8859-10", "ISO8859-10"]);
    singlebyte!(builder, mod=iso_8859_11, name="ISO-8859-11", aliases=["8859-11", "ISO8859-11"]);
    singlebyte!(builder, mod=iso_8859_13, name="ISO-8859-13", aliases=["8859-13", "ISO8859-13"]);
    singlebyte!(builder, mod=iso_8859_14, name="ISO-8859-14", aliases=["8859-14", "ISO8859-14"]);
    singlebyte!(builder, mod=iso_8859_15, name="ISO-8859-15", aliases=["8859-15", "ISO8859-15"]);
    singlebyte!(builder, mod=iso_8859_16, name="ISO-8859-16", aliases=["8859-16", "ISO8859-16"]);
    Ok(())
}

#[cfg(feature = "koi8")]
fn register_koi8(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    singlebyte!(builder, mod=koi8_r, name="KOI8-R", aliases=["KOI8R"]);
    singlebyte!(builder, mod=koi8_u, name="KOI8-U", aliases=["KOI8U"]);
    Ok(())
}

#[cfg(feature = "windows")]
fn register_windows(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    singlebyte!(builder, mod=windows_874, name="WINDOWS-874", aliases=["CP874"]);
    singlebyte!(builder, mod=windows_1250, name="WINDOWS-1250", aliases=["CP1250"]);
    singlebyte!(builder, mod=windows_1251, name="WINDOWS-1251", aliases=["CP1251"]);
    singlebyte!(builder, mod=windows_1252, name="WINDOWS-1252", aliases=["CP1252"]);
    singlebyte!(builder, mod=windows_1253, name="WINDOWS-1253", aliases=["CP1253"]);
    singlebyte!(builder, mod=windows_1254, name="WINDOWS-1254", aliases=["CP1254"]);
    singlebyte!(builder, mod=windows_1255, name="WINDOWS-1255", aliases=["CP1255"]);
    singlebyte!(builder, mod=windows_1256, name="WINDOWS-1256", aliases=["CP1256"]);
    singlebyte!(builder, mod=windows_1257, name="WINDOWS-1257", aliases=["CP1257"]);
    singlebyte!(builder, mod=windows_1258, name="WINDOWS-1258", aliases=["CP1258"]);
    Ok(())
}

#[cfg(feature = "oem")]
fn register_oem(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    singlebyte!(builder, mod=cp437, name="CP437", aliases=["IBM437", "437"]);
    singlebyte!(builder, mod=cp850, name="CP850", aliases=["IBM850", "850"]);
    singlebyte!(builder, mod=cp852, name="CP852", aliases=["IBM852", "852"]);
    singlebyte!(builder, mod=cp866, name="CP866", aliases=["IBM866", "866"]);
    Ok(())
}

#[cfg(feature = "mac")]
fn register_mac(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    singlebyte!(builder, mod=macintosh, name="MACINTOSH", aliases=["MAC-ROMAN", "MACROMAN"]);
    Ok(())
}

/// Builds a registry with every encoding enabled at compile time.
///
/// Every codec is constructed (and its encode table derived) here, in a fixed order.
/// The process-wide registry behind `charmap::registry` is built by this function
/// on its first use; calling it directly gives an independent registry.
#[allow(unused_mut)]
pub fn bootstrap() -> Result<Registry, RegistryError> {
    let mut builder = Registry::builder();
    #[cfg(feature = "iso-8859")]
    register_iso_8859(&mut builder)?;
    #[cfg(feature = "koi8")]
    register_koi8(&mut builder)?;
    #[cfg(feature = "windows")]
    register_windows(&mut builder)?;
    #[cfg(feature = "oem")]
    register_oem(&mut builder)?;
    #[cfg(feature = "mac")]
    register_mac(&mut builder)?;

    let registry = builder.build();
    debug!(codecs = registry.len(), "built encoding registry");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::bootstrap;

    #[test]
    fn test_bootstrap() {
        let registry = bootstrap().unwrap();
        for name in registry.list() {
            let codec = registry.lookup(name).unwrap();
            assert_eq!(codec.name(), name);
            assert_eq!(registry.resolve(name), name);
            for alias in registry.aliases(name) {
                assert_eq!(registry.resolve(alias), name);
            }
        }
    }

    #[test]
    #[cfg(all(feature = "iso-8859", feature = "koi8", feature = "windows",
              feature = "oem", feature = "mac"))]
    fn test_bootstrap_default_set() {
        let registry = bootstrap().unwrap();
        assert_eq!(registry.len(), 15 + 2 + 10 + 4 + 1);
        assert_eq!(registry.aliases("ISO-8859-2"), vec!["8859-2", "ISO8859-2"]);
        assert_eq!(registry.aliases("CP437"), vec!["437", "IBM437"]);
    }

    #[test]
    fn test_every_codec_is_ascii_compatible() {
        let registry = bootstrap().unwrap();
        for name in registry.list() {
            assert!(registry.lookup(name).unwrap().is_ascii_compatible(), "{} is not", name);
        }
    }

    #[test]
    #[cfg(feature = "iso-8859")]
    fn test_independent_registries() {
        let a = bootstrap().unwrap();
        let b = bootstrap().unwrap();
        assert_eq!(a.list(), b.list());
        let (x, _) = a.lookup("ISO-8859-2").unwrap().decode(&[0xa1]);
        let (y, _) = b.lookup("ISO-8859-2").unwrap().decode(&[0xa1]);
        assert_eq!(x, y);
    }
}
