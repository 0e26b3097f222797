// src/core/alphabet.rs

/// The fourteen Śivasūtras in IAST, each line followed in place by its
/// marker (it) letter. Indices are stable for the process lifetime.
pub const SHIVA_SUTRAS: [&str; 57] = [
    "a", "i", "u", "ṇ", //  1: a i u Ṇ
    "ṛ", "ḷ", "k", //  2: ṛ ḷ K
    "e", "o", "ṅ", //  3: e o Ṅ
    "ai", "au", "c", //  4: ai au C
    "h", "y", "v", "r", "ṭ", //  5: ha ya va ra Ṭ
    "l", "ṇ", //  6: la Ṇ
    "ñ", "m", "ṅ", "ṇ", "n", "m", //  7: ña ma ṅa ṇa na M
    "jh", "bh", "ñ", //  8: jha bha Ñ
    "gh", "ḍh", "dh", "ṣ", //  9: gha ḍha dha Ṣ
    "j", "b", "g", "ḍ", "d", "ś", // 10: ja ba ga ḍa da Ś
    "kh", "ph", "ch", "ṭh", "th", "c", "ṭ", "t", "v", // 11: kha ... ta V
    "k", "p", "y", // 12: ka pa Y
    "ś", "ṣ", "s", "r", // 13: śa ṣa sa R
    "h", "l", // 14: ha L
];

/// Absolute indices of the fourteen markers. Role is decided by position:
/// "l" at 18 is a consonant, "l" at 56 is a marker.
pub const MARKER_POSITIONS: [usize; 14] = [3, 6, 9, 12, 17, 19, 25, 28, 32, 38, 47, 50, 54, 56];

pub fn alphabet() -> &'static [&'static str] {
    &SHIVA_SUTRAS
}

pub fn is_marker_position(index: usize) -> bool {
    MARKER_POSITIONS.binary_search(&index).is_ok()
}

/// Every index at which `symbol` occurs, in alphabet order.
pub fn occurrences(symbol: &str) -> impl Iterator<Item = usize> + '_ {
    SHIVA_SUTRAS
        .iter()
        .enumerate()
        .filter(move |(_, p)| **p == symbol)
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_markers_close_fourteen_lines() {
        assert_eq!(SHIVA_SUTRAS.len(), 57);
        assert_eq!(MARKER_POSITIONS.len(), 14);
        assert!(MARKER_POSITIONS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*MARKER_POSITIONS.last().unwrap(), SHIVA_SUTRAS.len() - 1);
        let markers: Vec<&str> = MARKER_POSITIONS.iter().map(|&i| SHIVA_SUTRAS[i]).collect();
        assert_eq!(
            markers,
            ["ṇ", "k", "ṅ", "c", "ṭ", "ṇ", "m", "ñ", "ṣ", "ś", "v", "y", "r", "l"]
        );
    }

    #[test]
    fn role_follows_position_not_symbol() {
        assert!(!is_marker_position(18));
        assert!(is_marker_position(56));
        assert_eq!(SHIVA_SUTRAS[18], SHIVA_SUTRAS[56]);
    }

    #[test]
    fn occurrences_are_in_order() {
        assert_eq!(occurrences("h").collect::<Vec<_>>(), vec![13, 55]);
        assert_eq!(occurrences("ṇ").collect::<Vec<_>>(), vec![3, 19, 23]);
        assert_eq!(occurrences("z").count(), 0);
    }
}
