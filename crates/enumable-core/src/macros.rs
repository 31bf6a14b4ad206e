//! # Declaration Macro
//!
//! [`enumable!`](crate::enumable) declares a value-backed enum and its
//! [`Enumable`](crate::Enumable) implementation together.

/// Declare an enum whose cases carry scalar values, and implement
/// [`Enumable`](crate::Enumable) for it.
///
/// The enum derives `Debug, Clone, Copy, PartialEq, Eq, Hash`; add further
/// derives through the outer attributes. Overrides for the `set_labels` and
/// `default_case` hooks go in an optional `hooks { ... }` block.
///
/// ```
/// use enumable_core::{Enumable, LabelMap, enumable};
///
/// enumable! {
///     pub enum Status: &'static str {
///         Draft = "draft",
///         InReview = "in_review",
///         Published = "published",
///     }
///     hooks {
///         fn set_labels() -> Option<LabelMap<&'static str>> {
///             Some(LabelMap::from([("in_review", "Awaiting Review".to_string())]))
///         }
///
///         fn default_case() -> Option<Self> {
///             Some(Self::Published)
///         }
///     }
/// }
///
/// assert_eq!(Status::values(), vec!["draft", "in_review", "published"]);
/// assert_eq!(Status::InReview.label(), "Awaiting Review");
/// assert_eq!(Status::Draft.label(), "Draft");
/// assert_eq!(Status::default_case(), Some(Status::Published));
/// ```
#[macro_export]
macro_rules! enumable {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $value_ty:ty {
            $(
                $(#[$case_meta:meta])*
                $case:ident = $value:expr
            ),+ $(,)?
        }
        $(
            hooks { $($hooks:tt)* }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$case_meta])*
                $case,
            )+
        }

        impl $crate::Enumable for $name {
            type Value = $value_ty;

            fn cases() -> &'static [Self] {
                &[$(Self::$case),+]
            }

            fn name(&self) -> &'static str {
                match *self {
                    $(Self::$case => stringify!($case),)+
                }
            }

            fn value(&self) -> Self::Value {
                match *self {
                    $(Self::$case => $value,)+
                }
            }

            $($($hooks)*)?
        }
    };
}
