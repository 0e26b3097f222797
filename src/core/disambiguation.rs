// src/core/disambiguation.rs
//! Occurrence resolution for symbols that recur in the Śivasūtras.
//!
//! The slicing algorithm only ever asks "which index do I start at, which
//! index do I stop at". Pairs whose traditional reading differs from the
//! first-occurrence default are listed in [`OVERRIDES`]; adding a new pair
//! never touches the constructor.

use crate::core::alphabet::{is_marker_position, occurrences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStrategy {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStrategy {
    /// First occurrence at or after the start, else first anywhere.
    FirstAfterStart,
    Last,
    /// The n-th (0-based) occurrence of the symbol in marker role.
    NthMarker(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub start: StartStrategy,
    pub marker: MarkerStrategy,
}

pub const DEFAULT: Resolution = Resolution {
    start: StartStrategy::First,
    marker: MarkerStrategy::FirstAfterStart,
};

/// (start, marker) → resolution, for the canonical alphabet only.
pub const OVERRIDES: &[((&str, &str), Resolution)] = &[
    // aṆ closes after la, not after a i u.
    (
        ("a", "ṇ"),
        Resolution { start: StartStrategy::First, marker: MarkerStrategy::NthMarker(1) },
    ),
    // haL: first ha, final L.
    (
        ("h", "l"),
        Resolution { start: StartStrategy::First, marker: MarkerStrategy::Last },
    ),
    // śaL: the ś of line 13, not the Ś marker of line 10.
    (
        ("ś", "l"),
        Resolution { start: StartStrategy::Last, marker: MarkerStrategy::FirstAfterStart },
    ),
];

pub fn lookup(start: &str, marker: &str) -> Option<Resolution> {
    OVERRIDES
        .iter()
        .find(|((s, m), _)| *s == start && *m == marker)
        .map(|(_, r)| *r)
}

/// Resolves (start, marker) to canonical alphabet indices.
/// `None` in either slot means the symbol does not occur.
pub fn resolve(start: &str, marker: &str) -> (Option<usize>, Option<usize>) {
    let resolution = lookup(start, marker).unwrap_or(DEFAULT);
    if resolution != DEFAULT {
        tracing::debug!(start, marker, ?resolution, "applying disambiguation override");
    }

    let start_idx = match resolution.start {
        StartStrategy::First => occurrences(start).next(),
        StartStrategy::Last => occurrences(start).last(),
    };

    let marker_idx = match resolution.marker {
        MarkerStrategy::FirstAfterStart => {
            first_after(occurrences(marker), start_idx.unwrap_or(0))
        }
        MarkerStrategy::Last => occurrences(marker).last(),
        MarkerStrategy::NthMarker(n) => occurrences(marker)
            .filter(|&i| is_marker_position(i))
            .nth(n),
    };

    (start_idx, marker_idx)
}

/// First index at or after `from`, falling back to the very first index.
pub fn first_after(indices: impl Iterator<Item = usize>, from: usize) -> Option<usize> {
    let all: Vec<usize> = indices.collect();
    all.iter()
        .copied()
        .find(|&i| i >= from)
        .or_else(|| all.first().copied())
}
