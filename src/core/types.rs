// src/core/types.rs
use crate::error::PratyaharaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic IAST sound symbol, e.g. "a", "kh" or "ai".
pub type Phoneme = String;

/// An ordered, duplicate-free span of phonemes in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pratyahara {
    pub phonemes: Vec<Phoneme>,
    /// True when (start, marker) is one of the seven named pairs.
    pub traditional: bool,
}

impl Pratyahara {
    pub fn contains(&self, phoneme: &str) -> bool {
        self.phonemes.iter().any(|p| p == phoneme)
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }
}

/// Coarse phonetic label derived from a phoneme set. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vowels,
    Consonants,
    Semivowels,
    Nasals,
    Mixed,
    Empty,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vowels => "vowels",
            Category::Consonants => "consonants",
            Category::Semivowels => "semivowels",
            Category::Nasals => "nasals",
            Category::Mixed => "mixed",
            Category::Empty => "empty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat `{phonemes, valid, error, traditional}` report of a construction,
/// the shape handed across the C ABI and printed by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Construction {
    pub phonemes: Vec<Phoneme>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub traditional: bool,
}

impl From<Result<Pratyahara, PratyaharaError>> for Construction {
    fn from(result: Result<Pratyahara, PratyaharaError>) -> Self {
        match result {
            Ok(group) => Self {
                phonemes: group.phonemes,
                valid: true,
                error: None,
                traditional: group.traditional,
            },
            Err(e) => Self {
                phonemes: Vec::new(),
                valid: false,
                error: Some(e.kind().to_string()),
                traditional: false,
            },
        }
    }
}

/// `{phonemes, valid, error}` answer of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedGroup {
    pub phonemes: Vec<Phoneme>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
