//! # Core Type Definitions
//!
//! Shared types for the enumeration facet:
//! - Filter and lookup entries (`CaseRef`)
//! - Label maps (`LabelMap`) and UI select options (`SelectOption`)
//! - Error types (`StrError`)
//!
//! ## Ordering Guarantees
//!
//! Every map in this module is an [`IndexMap`], so iteration follows
//! declaration order of the cases it was built from.

use crate::Enumable;
use indexmap::IndexMap;
use thiserror::Error;

// =============================================================================
// LABELS
// =============================================================================

/// Mapping from a case value to its display label.
///
/// Produced by `labels()` in declaration order, and returned by the
/// `set_labels()` hook to override automatic headlines.
pub type LabelMap<V> = IndexMap<V, String>;

/// Mapping from a case value to its case name, as produced by `to_array()`.
pub type NameMap<V> = IndexMap<V, &'static str>;

/// A single option for a UI select field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectOption<V> {
    /// The raw case value submitted by the form.
    pub value: V,
    /// The resolved label shown to the user.
    pub label: String,
}

impl<V> SelectOption<V> {
    /// Create a new select option.
    #[must_use]
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

// =============================================================================
// CASE REFERENCE
// =============================================================================

/// An entry accepted by `exists`, `only`, `except` and `generate`.
///
/// Either a case of `E` or one of its raw values. Both normalise to the
/// value through [`CaseRef::value`], so lists may mix the two freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRef<E: Enumable> {
    /// A case of the enumeration.
    Case(E),
    /// A raw value, which may or may not belong to a case.
    Value(E::Value),
}

impl<E: Enumable> CaseRef<E> {
    /// The value this entry refers to.
    #[must_use]
    pub fn value(&self) -> E::Value {
        match self {
            CaseRef::Case(case) => case.value(),
            CaseRef::Value(value) => *value,
        }
    }
}

impl<E: Enumable> From<E> for CaseRef<E> {
    fn from(case: E) -> Self {
        CaseRef::Case(case)
    }
}

/// Raw value conversions for the scalar types an enumeration may be backed by.
macro_rules! impl_case_ref_from_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<E: Enumable<Value = $ty>> From<$ty> for CaseRef<E> {
                fn from(value: $ty) -> Self {
                    CaseRef::Value(value)
                }
            }
        )+
    };
}

impl_case_ref_from_value!(
    &'static str,
    char,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
);

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by [`Str::call`](crate::Str::call).
///
/// Lookups on an enumeration never fail; only by-name string operations can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrError {
    /// No string operation is registered under this name.
    #[error("Unknown string operation: {0}")]
    UnknownOperation(String),

    /// A required argument was not supplied.
    #[error("Missing argument {index} for `{op}`")]
    MissingArgument { op: &'static str, index: usize },

    /// An argument could not be interpreted.
    #[error("Invalid argument for `{op}`: {arg:?}")]
    InvalidArgument { op: &'static str, arg: String },

    /// More arguments were supplied than the operation accepts.
    #[error("Too many arguments for `{op}`: expected at most {max}, got {got}")]
    TooManyArguments {
        op: &'static str,
        max: usize,
        got: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================
