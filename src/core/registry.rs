// src/core/registry.rs
use crate::core::classifier::classify;
use crate::core::constructor::construct;
use crate::core::types::{Category, NamedGroup, Pratyahara};
use crate::error::PratyaharaError;
use serde::Serialize;
use std::sync::OnceLock;

/// The seven traditional pratyāhāras: (name, start, marker, gloss).
pub const NAMED_PAIRS: [(&str, &str, &str, &str); 7] = [
    ("ac", "a", "c", "vowels"),
    ("hal", "h", "l", "consonants"),
    ("ik", "i", "k", "close vowels"),
    ("aṇ", "a", "ṇ", "vowels and semivowels"),
    ("yañ", "y", "ñ", "semivowels"),
    ("jhal", "jh", "l", "non-nasal consonants"),
    ("śal", "ś", "l", "sibilants and h"),
];

pub fn is_traditional(start: &str, marker: &str) -> bool {
    NAMED_PAIRS.iter().any(|(_, s, m, _)| *s == start && *m == marker)
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub start: &'static str,
    pub marker: &'static str,
    pub gloss: &'static str,
    pub category: Category,
    pub phonemes: Vec<String>,
}

/// Precomputed named groups, in traditional order. Built once, read-only after.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    fn build() -> Self {
        let entries: Vec<RegistryEntry> = NAMED_PAIRS
            .iter()
            .filter_map(|&(name, start, marker, gloss)| match construct(start, marker) {
                Ok(Pratyahara { phonemes, .. }) => Some(RegistryEntry {
                    name,
                    start,
                    marker,
                    gloss,
                    category: classify(&phonemes),
                    phonemes,
                }),
                Err(e) => {
                    tracing::error!(name, error = %e, "named pratyahara failed to construct");
                    None
                }
            })
            .collect();
        debug_assert_eq!(entries.len(), NAMED_PAIRS.len(), "every named pair must construct");
        tracing::info!(groups = entries.len(), "built named pratyahara registry");
        Self { entries }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::build)
    }

    /// Case-insensitive lookup by name.
    pub fn entry(&self, name: &str) -> Option<&RegistryEntry> {
        let key = name.trim().to_lowercase();
        self.entries.iter().find(|e| e.name == key)
    }

    pub fn get(&self, name: &str) -> NamedGroup {
        match self.entry(name) {
            Some(entry) => NamedGroup {
                phonemes: entry.phonemes.clone(),
                valid: true,
                error: None,
            },
            None => {
                let err = PratyaharaError::UnknownGroup(name.to_string());
                tracing::debug!(name, error = %err, "unknown named group");
                NamedGroup { phonemes: Vec::new(), valid: false, error: Some(err.kind().to_string()) }
            }
        }
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_seven_groups_are_built_in_order() {
        let names: Vec<&str> = Registry::global().entries().iter().map(|e| e.name).collect();
        assert_eq!(names, ["ac", "hal", "ik", "aṇ", "yañ", "jhal", "śal"]);
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let registry = Registry::global();
        assert!(registry.get("AC").valid);
        assert!(registry.get(" Hal ").valid);
        assert!(registry.get("AṆ").valid);
        assert_eq!(registry.get("ac"), registry.get("Ac"));
    }

    #[test]
    fn unknown_names_are_invalid() {
        let group = Registry::global().get("xyz");
        assert!(!group.valid);
        assert!(group.phonemes.is_empty());
        assert_eq!(group.error.as_deref(), Some("unknown-group"));
        assert_eq!(Registry::global().get("ac").error, None);
    }

    #[test]
    fn registry_holds_every_named_pair() {
        assert_eq!(Registry::global().entries().len(), NAMED_PAIRS.len());
        for (name, ..) in NAMED_PAIRS {
            assert!(Registry::global().entry(name).is_some(), "{name}");
        }
    }

    #[test]
    fn entries_carry_their_category() {
        let registry = Registry::global();
        assert_eq!(registry.entry("ac").unwrap().category, Category::Vowels);
        assert_eq!(registry.entry("hal").unwrap().category, Category::Consonants);
        assert_eq!(registry.entry("yañ").unwrap().category, Category::Consonants);
        assert_eq!(registry.entry("aṇ").unwrap().category, Category::Mixed);
    }

    #[test]
    fn traditional_pairs() {
        assert!(is_traditional("jh", "l"));
        assert!(!is_traditional("l", "jh"));
    }
}
