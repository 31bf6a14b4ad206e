//! # Property-Based Tests
//!
//! Invariants of lookup and subset generation, checked with proptest over
//! arbitrary mixes of cases, known values and unknown values.

use enumable_core::{CaseRef, Enumable, enumable};
use proptest::collection::vec;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

enumable! {
    enum Letter: &'static str {
        Alpha = "a",
        Bravo = "b",
        Charlie = "c",
        Delta = "d",
        Echo = "e",
        Foxtrot = "f",
        Golf = "g",
        Hotel = "h",
    }
}

/// Known values followed by values no case carries.
const CANDIDATES: [&str; 12] = ["a", "b", "c", "d", "e", "f", "g", "h", "x", "y", "z", ""];

/// An entry as a raw value, or as the case when one exists and `as_case` is set.
fn entry(index: usize, as_case: bool) -> CaseRef<Letter> {
    let value = CANDIDATES[index];
    match Letter::get_case(value) {
        Some(case) if as_case => CaseRef::Case(case),
        _ => CaseRef::Value(value),
    }
}

fn entries_strategy() -> impl Strategy<Value = Vec<(usize, bool)>> {
    vec((0..CANDIDATES.len(), any::<bool>()), 0..24)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// get_case round-trips every existing value and misses the rest.
    #[test]
    fn get_case_matches_exists(index in 0..CANDIDATES.len()) {
        let value = CANDIDATES[index];
        match Letter::get_case(value) {
            Some(case) => {
                prop_assert!(Letter::exists(value));
                prop_assert_eq!(case.value(), value);
            }
            None => prop_assert!(!Letter::exists(value)),
        }
    }

    /// only(L) is exactly the declared cases whose value is in L, in order.
    #[test]
    fn only_is_ordered_membership_filter(raw in entries_strategy()) {
        let entries: Vec<_> = raw.iter().map(|&(i, c)| entry(i, c)).collect();
        let wanted: HashSet<_> = entries.iter().map(CaseRef::value).collect();

        let expected: Vec<Letter> = Letter::cases()
            .iter()
            .copied()
            .filter(|case| wanted.contains(&case.value()))
            .collect();

        let subset = Letter::only(entries);
        prop_assert_eq!(subset.cases(), expected.as_slice());
    }

    /// except(L) equals only(values() − L).
    #[test]
    fn except_is_complement_of_only(raw in entries_strategy()) {
        let entries: Vec<_> = raw.iter().map(|&(i, c)| entry(i, c)).collect();
        let excluded: HashSet<_> = entries.iter().map(CaseRef::value).collect();

        let remaining: Vec<&'static str> = Letter::values()
            .into_iter()
            .filter(|value| !excluded.contains(value))
            .collect();

        prop_assert_eq!(Letter::except(entries), Letter::only(remaining));
    }

    /// Mixing cases and raw values gives the same subset as raw values alone.
    #[test]
    fn generate_ignores_entry_form(raw in entries_strategy()) {
        let mixed: Vec<_> = raw.iter().map(|&(i, c)| entry(i, c)).collect();
        let values: Vec<&'static str> = raw.iter().map(|&(i, _)| CANDIDATES[i]).collect();

        prop_assert_eq!(Letter::generate(mixed), Letter::generate(values));
    }

    /// to_array has one entry per case, paired positionally.
    #[test]
    fn to_array_pairs_subset(raw in entries_strategy()) {
        let subset = Letter::only(raw.iter().map(|&(i, _)| CANDIDATES[i]));
        let array = subset.to_array();

        prop_assert_eq!(array.len(), subset.count());
        for (case, (value, name)) in subset.iter().zip(array.iter()) {
            prop_assert_eq!(case.value(), *value);
            prop_assert_eq!(case.name(), *name);
        }
    }

    /// Filtering a subset never escapes it.
    #[test]
    fn nested_only_is_intersection(left in entries_strategy(), right in entries_strategy()) {
        let left_values: Vec<&'static str> = left.iter().map(|&(i, _)| CANDIDATES[i]).collect();
        let right_values: Vec<&'static str> = right.iter().map(|&(i, _)| CANDIDATES[i]).collect();

        let nested = Letter::only(left_values.clone()).only(right_values.clone());
        let both: Vec<&'static str> = left_values
            .into_iter()
            .filter(|value| right_values.contains(value))
            .collect();

        prop_assert_eq!(nested, Letter::only(both));
    }

    /// random_with always returns a member, and None only for empty sets.
    #[test]
    fn random_is_member(raw in entries_strategy(), seed in any::<u64>()) {
        let subset = Letter::only(raw.iter().map(|&(i, _)| CANDIDATES[i]));
        let mut rng = StdRng::seed_from_u64(seed);

        match subset.random_with(&mut rng) {
            Some(case) => prop_assert!(subset.contains(&case)),
            None => prop_assert!(subset.is_empty()),
        }
    }
}
