// src/core/lookup.rs
use crate::core::constructor::construct;
use crate::core::registry::Registry;
use crate::core::types::NamedGroup;

/// Registry lookup under a case-insensitive name.
pub fn get_named_group(name: &str) -> NamedGroup {
    Registry::global().get(name)
}

/// Splits a two-character shorthand such as "ac" into ("a", "c").
///
/// Both symbols are lowercase IAST, matched case-sensitively: "eC" does not
/// name the span "ec". Only single-character start and marker symbols are
/// addressable this way; "jhl" or "aic" are not split at phoneme boundaries.
pub fn parse_shorthand(shorthand: &str) -> Option<(String, String)> {
    let mut chars = shorthand.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(start), Some(marker), None) => Some((start.to_string(), marker.to_string())),
        _ => None,
    }
}

/// Is `phoneme` in the named group, or else in the group spelled by a
/// two-character (start, marker) shorthand? Names ignore case; shorthand
/// does not (see [`parse_shorthand`]).
pub fn is_member(phoneme: &str, group: &str) -> bool {
    if let Some(entry) = Registry::global().entry(group) {
        return entry.phonemes.iter().any(|p| p == phoneme);
    }
    let Some((start, marker)) = parse_shorthand(group) else {
        tracing::debug!(group, "not a named group or a two-character shorthand");
        return false;
    };
    construct(&start, &marker)
        .map(|pratyahara| pratyahara.contains(phoneme))
        .unwrap_or(false)
}

/// Names of every registered group containing `phoneme`, in registry order.
pub fn find_groups_containing(phoneme: &str) -> Vec<String> {
    Registry::global()
        .entries()
        .iter()
        .filter(|entry| entry.phonemes.iter().any(|p| p == phoneme))
        .map(|entry| entry.name.to_string())
        .collect()
}
