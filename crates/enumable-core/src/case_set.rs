//! # Case Sets
//!
//! [`CaseSet`] is the read-only, ordered view every query runs against.
//!
//! The full list of a type borrows its `&'static` case slice; filtered
//! subsets own a `Vec`. Both expose the same operations, so a subset can be
//! labelled, queried or filtered again exactly like the type it came from.
//!
//! Filtering never reorders: `only`, `except` and `generate` test membership
//! against the set's own list and keep that list's order.

use crate::Enumable;
use crate::types::{CaseRef, LabelMap, NameMap, SelectOption};
use rand::Rng;
use rand::seq::SliceRandom;
use std::borrow::Cow;
use std::collections::HashSet;
use std::ops::Deref;

/// An ordered snapshot of cases of `E`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSet<E: Enumable> {
    cases: Cow<'static, [E]>,
}

impl<E: Enumable> CaseSet<E> {
    /// Every case of `E` in declaration order.
    #[must_use]
    pub fn all() -> Self {
        Self {
            cases: Cow::Borrowed(E::cases()),
        }
    }

    /// The cases of this set, in order.
    #[must_use]
    pub fn cases(&self) -> &[E] {
        &self.cases
    }

    pub fn into_vec(self) -> Vec<E> {
        self.cases.into_owned()
    }

    pub fn values(&self) -> Vec<E::Value> {
        self.iter().map(E::value).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(E::name).collect()
    }

    /// Resolved labels keyed by value, in set order.
    pub fn labels(&self) -> LabelMap<E::Value> {
        let overrides = E::set_labels();
        self.iter()
            .map(|case| (case.value(), resolve_label(overrides.as_ref(), case)))
            .collect()
    }

    /// Value → name, in set order.
    pub fn to_array(&self) -> NameMap<E::Value> {
        self.values().into_iter().zip(self.names()).collect()
    }

    pub fn to_collection(&self) -> Self {
        self.clone()
    }

    /// Alias for [`CaseSet::labels`].
    pub fn to_select_array(&self) -> LabelMap<E::Value> {
        self.labels()
    }

    pub fn select_options(&self) -> Vec<SelectOption<E::Value>> {
        self.labels()
            .into_iter()
            .map(|(value, label)| SelectOption::new(value, label))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.cases.len()
    }

    pub fn first(&self) -> Option<E> {
        self.cases.first().copied()
    }

    pub fn last(&self) -> Option<E> {
        self.cases.last().copied()
    }

    /// A uniformly chosen member, using the thread-local generator.
    pub fn random(&self) -> Option<E> {
        self.random_with(&mut rand::thread_rng())
    }

    /// A uniformly chosen member drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<E> {
        self.cases.choose(rng).copied()
    }

    /// The type's designated default for the full set, the first member for
    /// any other set.
    ///
    /// Subsets do not carry the `default_case` hook of the type they were cut
    /// from, even when the designated default survived the filter.
    pub fn default_case(&self) -> Option<E> {
        match self.cases {
            Cow::Borrowed(_) => E::default_case(),
            Cow::Owned(_) => self.first(),
        }
    }

    pub fn exists(&self, entry: impl Into<CaseRef<E>>) -> bool {
        self.contains_value(entry.into().value())
    }

    /// The first member whose value equals `value`.
    pub fn get_case(&self, value: E::Value) -> Option<E> {
        self.iter().copied().find(|case| case.value() == value)
    }

    /// The name of the member with `value`, or `""`.
    pub fn get_name(&self, value: E::Value) -> &'static str {
        self.get_case(value).map(|case| case.name()).unwrap_or_default()
    }

    /// Override label for `value`, else the matching member's headline, else `""`.
    pub fn get_label(&self, value: E::Value) -> String {
        E::set_labels()
            .and_then(|mut overrides| overrides.swap_remove(&value))
            .or_else(|| self.get_case(value).map(|case| case.headline()))
            .unwrap_or_default()
    }

    /// Members whose value appears in `entries`.
    pub fn only<I>(&self, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CaseRef<E>>,
    {
        self.generate(entries)
    }

    /// Members whose value does not appear in `entries`.
    pub fn except<I>(&self, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CaseRef<E>>,
    {
        let excluded: HashSet<E::Value> = entries
            .into_iter()
            .map(|entry| entry.into().value())
            .collect();

        self.generate(
            self.iter()
                .copied()
                .filter(|case| !excluded.contains(&case.value())),
        )
    }

    /// A subset from a mix of cases and raw values.
    ///
    /// Entries whose value is not carried by a member are dropped. The result
    /// keeps this set's order and holds each member at most once.
    pub fn generate<I>(&self, entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CaseRef<E>>,
    {
        let mut wanted = HashSet::new();
        let mut dropped = 0usize;

        for entry in entries {
            let value = entry.into().value();
            if self.contains_value(value) {
                wanted.insert(value);
            } else {
                dropped += 1;
                tracing::trace!(?value, "dropping entry with no matching case");
            }
        }

        let cases: Vec<E> = self
            .iter()
            .copied()
            .filter(|case| wanted.contains(&case.value()))
            .collect();

        tracing::debug!(kept = cases.len(), dropped, "generated case subset");

        Self {
            cases: Cow::Owned(cases),
        }
    }

    fn contains_value(&self, value: E::Value) -> bool {
        self.iter().any(|case| case.value() == value)
    }
}

/// Override first, then the headline of the case name.
fn resolve_label<E: Enumable>(overrides: Option<&LabelMap<E::Value>>, case: &E) -> String {
    overrides
        .and_then(|labels| labels.get(&case.value()).cloned())
        .unwrap_or_else(|| case.headline())
}

// =============================================================================
// COLLECTION TRAITS
// =============================================================================

impl<E: Enumable> Default for CaseSet<E> {
    fn default() -> Self {
        Self {
            cases: Cow::Owned(Vec::new()),
        }
    }
}

impl<E: Enumable> Deref for CaseSet<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.cases
    }
}

impl<E: Enumable> FromIterator<E> for CaseSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            cases: Cow::Owned(iter.into_iter().collect()),
        }
    }
}

impl<E: Enumable> IntoIterator for CaseSet<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, E: Enumable> IntoIterator for &'a CaseSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(feature = "serde")]
impl<E: Enumable + serde::Serialize> serde::Serialize for CaseSet<E> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cases.iter())
    }
}

// =============================================================================
// TESTS
// =============================================================================
