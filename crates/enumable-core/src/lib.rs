//! # enumable-core
//!
//! Introspection and convenience operations for Rust enums.
//!
//! An enum implementing [`Enumable`] gets, with no further code:
//! - Listing: `values`, `names`, `labels`, `to_array`, `select_options`
//! - Lookup: `get_case`, `get_name`, `get_label`, `exists`
//! - Picks: `first`, `last`, `random`, `default_case`, `count`
//! - Subsets: `only`, `except`, `generate`, each returning a [`CaseSet`]
//!   with the same operations
//! - Per case: `label`, `headline`, and `str` for string transforms
//!
//! ## Example
//!
//! ```
//! use enumable_core::{Enumable, enumable};
//!
//! enumable! {
//!     pub enum Sample: &'static str {
//!         Case1 = "case1",
//!         Case2 = "case2",
//!         Case3 = "case3",
//!     }
//! }
//!
//! let subset = Sample::except(["case1"]);
//! assert_eq!(subset.names(), vec!["Case2", "Case3"]);
//! assert_eq!(Sample::Case1.str(false).slug(), "case1");
//! ```
//!
//! ## Constraints
//!
//! - Pure and synchronous; only `random` reads process randomness
//! - Lookups never fail: absent cases give `None` or `""`
//! - Values and names must be unique per type (not checked)

// =============================================================================
// MODULES
// =============================================================================

pub mod case_set;
pub mod enumable;
pub mod macros;
pub mod primitives;
pub mod proxy;
pub mod strings;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use case_set::CaseSet;
pub use enumable::Enumable;
pub use proxy::{Str, StrOp};
pub use types::{CaseRef, LabelMap, NameMap, SelectOption, StrError};
