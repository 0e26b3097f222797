//! Properties of the seven named pratyāhāras and the query surface
//! grammar-rule modules rely on.

use pratyahara_core::core::registry::NAMED_PAIRS;
use pratyahara_core::{
    classify, construct, find_groups_containing, get_named_group, is_member, Category, Construction,
    PratyaharaError,
};
use std::collections::HashSet;

fn phonemes(name: &str) -> Vec<String> {
    let group = get_named_group(name);
    assert!(group.valid, "{name} should be registered");
    group.phonemes
}

fn set(name: &str) -> HashSet<String> {
    phonemes(name).into_iter().collect()
}

#[test]
fn construction_reproduces_every_named_group() {
    for (name, start, marker, _) in NAMED_PAIRS {
        let built = construct(start, marker).unwrap();
        assert!(built.traditional, "{name}");
        assert_eq!(built.phonemes, phonemes(name), "{name}");
    }
}

#[test]
fn vowels_and_consonants_are_disjoint() {
    assert!(set("ac").is_disjoint(&set("hal")));
}

#[test]
fn subgroups_nest() {
    assert!(set("ik").is_subset(&set("ac")));
    assert!(set("yañ").is_subset(&set("aṇ")));
    assert!(set("jhal").is_subset(&set("hal")));
    assert!(set("śal").is_subset(&set("jhal")));
}

#[test]
fn groups_are_duplicate_free() {
    for (name, ..) in NAMED_PAIRS {
        let list = phonemes(name);
        assert_eq!(list.len(), set(name).len(), "{name}");
    }
}

#[test]
fn ac_membership_separates_vowels_from_consonants() {
    for p in phonemes("ac") {
        assert!(is_member(&p, "ac"), "{p}");
    }
    for p in phonemes("hal") {
        assert!(!is_member(&p, "ac"), "{p}");
    }
}

#[test]
fn failures_are_reported_not_raised() {
    let not_found = Construction::from(construct("z", "c"));
    assert!(!not_found.valid);
    assert_eq!(not_found.error.as_deref(), Some("not-found"));

    let order = Construction::from(construct("u", "a"));
    assert!(!order.valid);
    assert_eq!(order.error.as_deref(), Some("order-violation"));
    assert!(order.phonemes.is_empty());

    assert!(matches!(construct("", ""), Err(PratyaharaError::InvalidInput)));
    let unknown = get_named_group("nope");
    assert!(!unknown.valid);
    assert_eq!(unknown.error.as_deref(), Some("unknown-group"));
}

#[test]
fn reverse_lookup() {
    assert_eq!(find_groups_containing("a"), ["ac", "aṇ"]);
    assert_eq!(find_groups_containing("k"), ["hal", "jhal"]);
    assert_eq!(find_groups_containing("h"), ["hal", "aṇ", "jhal", "śal"]);
}

#[test]
fn classification() {
    assert_eq!(classify(&phonemes("ac")), Category::Vowels);
    assert_eq!(classify(&phonemes("ik")), Category::Vowels);
    assert_eq!(classify(&phonemes("jhal")), Category::Consonants);
    assert_eq!(classify(&["a", "k"]), Category::Mixed);
}
