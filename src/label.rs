// This is a part of rust-charmap.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving an encoding from a string label.
//!
//! Labels are normalized before any lookup:
//! they are uppercased and every `_` is replaced with `-`,
//! so `iso_8859_2` is looked up as `ISO-8859-2`.
//! A normalized label which is a registered alias is then
//! replaced by the canonical name it points to.
//! Aliases do not chain.

use std::collections::{BTreeMap, HashMap};

use crate::types::{Codec, CodecRef};

/// Normalizes an encoding label: uppercases it and replaces every `_` with `-`.
///
/// Uppercasing maps each character to exactly one character;
/// a character whose uppercase form would expand (`ß`) is kept as is.
pub fn normalize(label: &str) -> String {
    label
        .chars()
        .map(|ch| match ch {
            '_' => '-',
            _ => upper(ch),
        })
        .collect()
}

fn upper(ch: char) -> char {
    let mut it = ch.to_uppercase();
    match (it.next(), it.next()) {
        (Some(up), None) => up,
        _ => ch,
    }
}

fn is_normalized(name: &str) -> bool {
    !name.is_empty() && normalize(name) == name
}

/// Errors from building a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The name would never be produced by `normalize`, so it could never be looked up.
    #[error("encoding name {name:?} is not normalized")]
    NotNormalized { name: String },
    /// The canonical name has been registered already.
    #[error("encoding {name:?} is registered twice")]
    DuplicateName { name: String },
    /// The alias is already taken by a canonical name or another encoding's alias.
    #[error("alias {name:?} conflicts with {existing:?}")]
    NameConflict { name: String, existing: String },
}

/// A frozen set of codecs, keyed by their canonical names, and aliases to them.
///
/// `Registry` can only be built by `RegistryBuilder` and is read-only afterwards,
/// so it can be shared across threads without locking.
#[derive(Debug, Default)]
pub struct Registry {
    codecs: BTreeMap<String, Box<dyn Codec + Send + Sync>>,
    aliases: HashMap<String, String>,
}

impl Registry {
    /// Starts building a new registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { registry: Registry::default() }
    }

    /// Normalizes given label and resolves it to a canonical name if it is an alias.
    /// The result is not guaranteed to name a registered codec.
    pub fn resolve(&self, label: &str) -> String {
        let label = normalize(label);
        match self.aliases.get(&label) {
            Some(name) => name.clone(),
            None => label,
        }
    }

    /// Returns the codec registered under given canonical name, if any.
    pub fn lookup(&self, name: &str) -> Option<CodecRef<'_>> {
        self.codecs.get(name).map(|codec| &**codec as CodecRef<'_>)
    }

    /// Returns the codec for given label, if any.
    pub fn codec_for_label(&self, label: &str) -> Option<CodecRef<'_>> {
        self.lookup(&self.resolve(label))
    }

    /// Returns the canonical names of all registered codecs, sorted.
    pub fn list(&self) -> Vec<&str> {
        self.codecs.keys().map(|name| &name[..]).collect()
    }

    /// Returns the aliases of given canonical name, sorted.
    pub fn aliases(&self, name: &str) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .aliases
            .iter()
            .filter(|&(_, canonical)| canonical == name)
            .map(|(alias, _)| &alias[..])
            .collect();
        aliases.sort_unstable();
        aliases
    }

    /// Returns the number of registered codecs.
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    /// Returns true if no codec is registered.
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

/// A registry under construction.
#[derive(Debug)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Registers `codec` under `name` and every alias in `aliases`.
    ///
    /// Canonical names and aliases share a single namespace,
    /// and all of them should be given in normalized form.
    /// Nothing is registered on an error.
    pub fn register<C>(&mut self, codec: C, name: &str, aliases: &[&str])
                       -> Result<&mut RegistryBuilder, RegistryError>
        where C: Codec + Send + Sync + 'static
    {
        for &n in Some(&name).into_iter().chain(aliases) {
            if !is_normalized(n) {
                return Err(RegistryError::NotNormalized { name: n.to_string() });
            }
        }
        if self.registry.codecs.contains_key(name) {
            return Err(RegistryError::DuplicateName { name: name.to_string() });
        }
        if let Some(existing) = self.registry.aliases.get(name) {
            return Err(RegistryError::NameConflict { name: name.to_string(),
                                                     existing: existing.clone() });
        }
        for (i, &alias) in aliases.iter().enumerate() {
            let existing = if alias == name || aliases[..i].contains(&alias) {
                Some(name)
            } else if self.registry.codecs.contains_key(alias) {
                Some(alias)
            } else {
                self.registry.aliases.get(alias).map(|s| &s[..])
            };
            if let Some(existing) = existing {
                return Err(RegistryError::NameConflict { name: alias.to_string(),
                                                         existing: existing.to_string() });
            }
        }

        self.registry.codecs.insert(name.to_string(), Box::new(codec));
        for &alias in aliases {
            self.registry.aliases.insert(alias.to_string(), name.to_string());
        }
        Ok(self)
    }

    /// Freezes the registry.
    pub fn build(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::singlebyte::TableCodec;

    fn identity(code: u8) -> u16 {
        code as u16
    }

    fn contrived_registry() -> Registry {
        let mut builder = Registry::builder();
        builder
            .register(TableCodec::new("LATIN-X", identity), "LATIN-X", &["LX", "LATINX"])
            .unwrap()
            .register(TableCodec::new("LATIN-Y", identity), "LATIN-Y", &[])
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("iso_8859_2"), "ISO-8859-2");
        assert_eq!(normalize("ISO-8859-2"), "ISO-8859-2");
        assert_eq!(normalize("windows_1250"), "WINDOWS-1250");
        assert_eq!(normalize(""), "");
        // no trimming, no other separators
        assert_eq!(normalize(" latin.x "), " LATIN.X ");
    }

    #[test]
    fn test_normalize_non_ascii() {
        assert_eq!(normalize("\u{e9}tude_x"), "\u{c9}TUDE-X");
        // one character in, one character out
        assert_eq!(normalize("stra\u{df}e"), "STRA\u{df}E");
        assert_eq!(normalize("\u{fb01}"), "\u{fb01}");
        assert!(is_normalized("STRA\u{df}E"));
    }

    #[test]
    fn test_resolve() {
        let registry = contrived_registry();
        assert_eq!(registry.resolve("latin_x"), "LATIN-X");
        assert_eq!(registry.resolve("lx"), "LATIN-X");
        assert_eq!(registry.resolve("LatinX"), "LATIN-X");
        assert_eq!(registry.resolve("latin-z"), "LATIN-Z");
    }

    #[test]
    fn test_lookup() {
        let registry = contrived_registry();
        assert_eq!(registry.lookup("LATIN-X").map(|c| c.name()), Some("LATIN-X"));
        // `lookup` expects an already resolved name
        assert!(registry.lookup("latin-x").is_none());
        assert!(registry.lookup("LX").is_none());
        assert_eq!(registry.codec_for_label("lx").map(|c| c.name()), Some("LATIN-X"));
        assert!(registry.codec_for_label("latin-z").is_none());
    }

    #[test]
    fn test_list_and_aliases() {
        let registry = contrived_registry();
        assert_eq!(registry.list(), vec!["LATIN-X", "LATIN-Y"]);
        assert_eq!(registry.aliases("LATIN-X"), vec!["LATINX", "LX"]);
        assert!(registry.aliases("LATIN-Y").is_empty());
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(Registry::builder().build().is_empty());
    }

    #[test]
    fn test_register_not_normalized() {
        let mut builder = Registry::builder();
        assert_eq!(builder.register(TableCodec::new("x", identity), "latin-x", &[]).err(),
                   Some(RegistryError::NotNormalized { name: "latin-x".to_string() }));
        assert_eq!(builder.register(TableCodec::new("x", identity), "LATIN-X", &["L_X"]).err(),
                   Some(RegistryError::NotNormalized { name: "L_X".to_string() }));
        assert_eq!(builder.register(TableCodec::new("x", identity), "", &[]).err(),
                   Some(RegistryError::NotNormalized { name: "".to_string() }));
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_register_conflicts() {
        let mut builder = Registry::builder();
        builder.register(TableCodec::new("LATIN-X", identity), "LATIN-X", &["LX"]).unwrap();

        assert_eq!(builder.register(TableCodec::new("LATIN-X", identity), "LATIN-X", &[]).err(),
                   Some(RegistryError::DuplicateName { name: "LATIN-X".to_string() }));
        // canonical name taken by an alias
        assert_eq!(builder.register(TableCodec::new("LX", identity), "LX", &[]).err(),
                   Some(RegistryError::NameConflict { name: "LX".to_string(),
                                                      existing: "LATIN-X".to_string() }));
        // alias taken by a canonical name
        assert_eq!(builder.register(TableCodec::new("LATIN-Y", identity), "LATIN-Y",
                                    &["LATIN-X"]).err(),
                   Some(RegistryError::NameConflict { name: "LATIN-X".to_string(),
                                                      existing: "LATIN-X".to_string() }));
        // alias taken by another encoding's alias
        assert_eq!(builder.register(TableCodec::new("LATIN-Y", identity), "LATIN-Y", &["LX"]).err(),
                   Some(RegistryError::NameConflict { name: "LX".to_string(),
                                                      existing: "LATIN-X".to_string() }));
        // alias equal to its own canonical name
        assert_eq!(builder.register(TableCodec::new("LATIN-Y", identity), "LATIN-Y",
                                    &["LATIN-Y"]).err(),
                   Some(RegistryError::NameConflict { name: "LATIN-Y".to_string(),
                                                      existing: "LATIN-Y".to_string() }));

        // failed registrations leave nothing behind
        let registry = builder.build();
        assert_eq!(registry.list(), vec!["LATIN-X"]);
        assert_eq!(registry.resolve("latin-y"), "LATIN-Y");
        assert!(registry.codec_for_label("latin-y").is_none());
    }
}
