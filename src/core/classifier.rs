// src/core/classifier.rs
use crate::core::types::Category;
use std::collections::HashSet;
use std::sync::OnceLock;

const VOWELS: &[&str] = &[
    "a", "ā", "i", "ī", "u", "ū", "ṛ", "ṝ", "ḷ", "ḹ", "e", "ai", "o", "au",
];

const CONSONANTS: &[&str] = &[
    "k", "kh", "g", "gh", "ṅ", "c", "ch", "j", "jh", "ñ", "ṭ", "ṭh", "ḍ", "ḍh", "ṇ", "t", "th",
    "d", "dh", "n", "p", "ph", "b", "bh", "m", "y", "r", "l", "v", "ś", "ṣ", "s", "h",
];

const SEMIVOWELS: &[&str] = &["y", "v", "r", "l"];

const NASALS: &[&str] = &["ñ", "m", "ṅ", "ṇ", "n"];

struct ReferenceSets {
    ordered: [(Category, HashSet<&'static str>); 4],
}

fn reference_sets() -> &'static ReferenceSets {
    static SETS: OnceLock<ReferenceSets> = OnceLock::new();
    SETS.get_or_init(|| ReferenceSets {
        ordered: [
            (Category::Vowels, VOWELS.iter().copied().collect()),
            (Category::Consonants, CONSONANTS.iter().copied().collect()),
            (Category::Semivowels, SEMIVOWELS.iter().copied().collect()),
            (Category::Nasals, NASALS.iter().copied().collect()),
        ],
    })
}

/// Labels a phoneme set by the first reference set, in the order
/// vowels, consonants, semivowels, nasals, that contains every element.
pub fn classify<S: AsRef<str>>(phonemes: &[S]) -> Category {
    if phonemes.is_empty() {
        return Category::Empty;
    }
    reference_sets()
        .ordered
        .iter()
        .find(|(_, set)| phonemes.iter().all(|p| set.contains(p.as_ref())))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Mixed)
}
