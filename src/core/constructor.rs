// src/core/constructor.rs
use crate::core::alphabet::{is_marker_position, SHIVA_SUTRAS};
use crate::core::disambiguation::{self, first_after};
use crate::core::registry::is_traditional;
use crate::core::types::{Phoneme, Pratyahara};
use crate::error::{PratyaharaError, Result};

/// Builds the pratyāhāra spanning `start` up to `marker` on the Śivasūtras.
///
/// Occurrences are resolved through the disambiguation table, then the
/// half-open slice is stripped of every marker position and of any stray
/// ordinary phoneme sharing the marker's symbol.
pub fn construct(start: &str, marker: &str) -> Result<Pratyahara> {
    check_input(start, marker)?;
    let (start_idx, marker_idx) = disambiguation::resolve(start, marker);
    let (start_idx, marker_idx) = check_span(start, marker, start_idx, marker_idx)?;

    let phonemes = dedup(
        (start_idx..marker_idx)
            .filter(|&i| !is_marker_position(i))
            .map(|i| SHIVA_SUTRAS[i])
            .filter(|p| *p != marker),
    );

    Ok(Pratyahara { phonemes, traditional: is_traditional(start, marker) })
}

/// Same slicing over a caller-supplied alphabet. Custom alphabets carry no
/// marker semantics: nothing is filtered and no overrides apply.
pub fn construct_in<S: AsRef<str>>(start: &str, marker: &str, alphabet: &[S]) -> Result<Pratyahara> {
    check_input(start, marker)?;
    let start_idx = alphabet.iter().position(|p| p.as_ref() == start);
    let marker_idx = first_after(
        alphabet
            .iter()
            .enumerate()
            .filter(|(_, p)| p.as_ref() == marker)
            .map(|(i, _)| i),
        start_idx.unwrap_or(0),
    );
    let (start_idx, marker_idx) = check_span(start, marker, start_idx, marker_idx)?;

    let phonemes = dedup(alphabet[start_idx..marker_idx].iter().map(|p| p.as_ref()));

    Ok(Pratyahara { phonemes, traditional: is_traditional(start, marker) })
}

/// Dispatches to [`construct`] or [`construct_in`].
pub fn construct_with<S: AsRef<str>>(
    start: &str,
    marker: &str,
    alphabet: Option<&[S]>,
) -> Result<Pratyahara> {
    match alphabet {
        Some(custom) => construct_in(start, marker, custom),
        None => construct(start, marker),
    }
}

fn check_input(start: &str, marker: &str) -> Result<()> {
    if start.trim().is_empty() || marker.trim().is_empty() {
        tracing::debug!(start, marker, "rejected construction: empty argument");
        return Err(PratyaharaError::InvalidInput);
    }
    Ok(())
}

fn check_span(
    start: &str,
    marker: &str,
    start_idx: Option<usize>,
    marker_idx: Option<usize>,
) -> Result<(usize, usize)> {
    let (Some(s), Some(m)) = (start_idx, marker_idx) else {
        let missing = if start_idx.is_none() { start } else { marker };
        tracing::debug!(start, marker, missing, "rejected construction: symbol not in alphabet");
        return Err(PratyaharaError::NotFound(missing.to_string()));
    };
    if s >= m {
        tracing::debug!(start, marker, s, m, "rejected construction: start does not precede marker");
        return Err(PratyaharaError::OrderViolation {
            start: start.to_string(),
            marker: marker.to_string(),
        });
    }
    Ok((s, m))
}

fn dedup<'a>(phonemes: impl Iterator<Item = &'a str>) -> Vec<Phoneme> {
    let mut out: Vec<Phoneme> = Vec::new();
    for p in phonemes {
        if !out.iter().any(|q| q == p) {
            out.push(p.to_string());
        }
    }
    out
}
