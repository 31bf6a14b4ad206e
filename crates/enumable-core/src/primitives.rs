//! # Defaults
//!
//! Compiled-in defaults for the string operations exposed through
//! [`Str`](crate::Str).
//!
//! These mirror the defaults of the usual string helper libraries so that
//! `case.str(false).slug()` and `case.str(false).call("slug", &[])` agree.

/// Separator used by `slug` when none is given.
pub const DEFAULT_SLUG_SEPARATOR: &str = "-";

/// Delimiter used by `snake` when none is given.
pub const DEFAULT_SNAKE_DELIMITER: &str = "_";

/// Delimiter used by `kebab`.
pub const KEBAB_DELIMITER: &str = "-";

/// Suffix appended by `limit` when the string was truncated.
pub const DEFAULT_LIMIT_END: &str = "...";

/// Word that replaces `@` in slugs (`"a@b"` becomes `"a-at-b"`).
pub const SLUG_AT_WORD: &str = "at";
