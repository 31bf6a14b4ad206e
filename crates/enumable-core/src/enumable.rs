//! # Enumable Trait
//!
//! The facet attached to a concrete enumeration.
//!
//! An implementor supplies three things: its cases in declaration order,
//! each case's `name`, and each case's `value`. Everything else is provided:
//!
//! - Type-level queries (`values`, `names`, `labels`, `get_case`, ...)
//! - Subset generation (`only`, `except`, `generate`) returning a [`CaseSet`]
//! - Case-level helpers (`label`, `headline`, `str`)
//!
//! Two hooks may be overridden: [`Enumable::set_labels`] and
//! [`Enumable::default_case`].
//!
//! ## Invariants
//!
//! Values and names must be unique within a type. This is not checked;
//! duplicate values make `get_case` return the first match and make
//! `to_array` / `labels` keep only the last entry per value.

use crate::case_set::CaseSet;
use crate::proxy::Str;
use crate::strings;
use crate::types::{CaseRef, LabelMap, NameMap, SelectOption};
use rand::Rng;
use std::fmt;
use std::hash::Hash;

/// Convenience operations for a closed, ordered set of named, valued cases.
///
/// Implement it by hand or declare the enum with [`enumable!`](crate::enumable).
pub trait Enumable: Copy + PartialEq + fmt::Debug + 'static {
    /// The scalar each case is backed by.
    type Value: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static;

    // =========================================================================
    // REQUIRED
    // =========================================================================

    /// All cases in declaration order.
    fn cases() -> &'static [Self];

    /// The identifier of this case.
    fn name(&self) -> &'static str;

    /// The scalar value of this case.
    fn value(&self) -> Self::Value;

    // =========================================================================
    // HOOKS
    // =========================================================================

    /// Custom labels keyed by value. Consulted before the automatic headline.
    ///
    /// An override for a value that no case carries is still returned by
    /// [`Enumable::get_label`].
    fn set_labels() -> Option<LabelMap<Self::Value>> {
        None
    }

    /// The default case. Falls back to [`Enumable::first`].
    ///
    /// Overrides must not call [`CaseSet::default_case`] on the full set,
    /// which defers back to this hook.
    fn default_case() -> Option<Self> {
        Self::first()
    }

    // =========================================================================
    // TYPE-LEVEL QUERIES
    // =========================================================================

    /// The full case list as a [`CaseSet`] (borrowed, no copy).
    fn all() -> CaseSet<Self> {
        CaseSet::all()
    }

    fn values() -> Vec<Self::Value> {
        Self::all().values()
    }

    fn names() -> Vec<&'static str> {
        Self::all().names()
    }

    /// Resolved labels keyed by value, in declaration order.
    fn labels() -> LabelMap<Self::Value> {
        Self::all().labels()
    }

    /// Value → name, in declaration order.
    fn to_array() -> NameMap<Self::Value> {
        Self::all().to_array()
    }

    fn to_collection() -> CaseSet<Self> {
        Self::all()
    }

    /// Alias for [`Enumable::labels`], for form select fields.
    fn to_select_array() -> LabelMap<Self::Value> {
        Self::labels()
    }

    /// Value/label pairs for form select fields, in declaration order.
    fn select_options() -> Vec<SelectOption<Self::Value>> {
        Self::all().select_options()
    }

    fn count() -> usize {
        Self::cases().len()
    }

    fn first() -> Option<Self> {
        Self::cases().first().copied()
    }

    fn last() -> Option<Self> {
        Self::cases().last().copied()
    }

    /// A uniformly chosen case, using the thread-local generator.
    fn random() -> Option<Self> {
        Self::all().random()
    }

    /// A uniformly chosen case drawn from `rng`.
    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Option<Self> {
        Self::all().random_with(rng)
    }

    /// Whether a case carries the entry's value. Accepts a case or a raw value.
    fn exists(entry: impl Into<CaseRef<Self>>) -> bool {
        Self::all().exists(entry)
    }

    /// The first case whose value equals `value`.
    fn get_case(value: Self::Value) -> Option<Self> {
        Self::all().get_case(value)
    }

    /// Alias for [`Enumable::get_case`].
    fn from_value(value: Self::Value) -> Option<Self> {
        Self::get_case(value)
    }

    /// The name of the case with `value`, or `""`.
    fn get_name(value: Self::Value) -> &'static str {
        Self::all().get_name(value)
    }

    /// Override label, else the case's headline, else `""`.
    fn get_label(value: Self::Value) -> String {
        Self::all().get_label(value)
    }

    // =========================================================================
    // SUBSETS
    // =========================================================================

    /// The cases whose value appears in `entries`, in declaration order.
    fn only<I>(entries: I) -> CaseSet<Self>
    where
        I: IntoIterator,
        I::Item: Into<CaseRef<Self>>,
    {
        Self::all().only(entries)
    }

    /// All cases except those whose value appears in `entries`.
    fn except<I>(entries: I) -> CaseSet<Self>
    where
        I: IntoIterator,
        I::Item: Into<CaseRef<Self>>,
    {
        Self::all().except(entries)
    }

    /// A subset from a mix of cases and raw values. Unknown entries are dropped.
    fn generate<I>(entries: I) -> CaseSet<Self>
    where
        I: IntoIterator,
        I::Item: Into<CaseRef<Self>>,
    {
        Self::all().generate(entries)
    }

    // =========================================================================
    // CASE-LEVEL
    // =========================================================================

    /// The resolved label of this case.
    fn label(&self) -> String {
        Self::get_label(self.value())
    }

    /// Title-cased rendering of the case name (`CaseOne` → `Case One`).
    fn headline(&self) -> String {
        strings::headline(self.name())
    }

    /// A string proxy bound to the label (`use_label`) or the value.
    fn str(&self, use_label: bool) -> Str {
        if use_label {
            Str::new(self.label())
        } else {
            Str::new(self.value().to_string())
        }
    }
}
