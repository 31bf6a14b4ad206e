//! # String Proxy
//!
//! [`Str`] binds one string (a case's value or label) and applies the
//! transformations from [`strings`](crate::strings) to it.
//!
//! Operations are available as typed methods, or by name through
//! [`Str::call`], which parses the name into a [`StrOp`]. Names are matched
//! case-insensitively with `_` and `-` ignored, so `"ucfirst"`, `"uc_first"`
//! and `"ucFirst"` are the same operation.
//!
//! ## Supported Operations
//!
//! | op | arguments |
//! |----|-----------|
//! | `slug` | `[separator]` |
//! | `snake` | `[delimiter]` |
//! | `kebab`, `camel`, `studly` (`pascal`), `title`, `headline` | – |
//! | `upper`, `lower`, `ucfirst`, `lcfirst`, `reverse`, `squish` | – |
//! | `limit` | `count [end]` |
//! | `start` | `prefix` |
//! | `finish` | `cap` |

use crate::Enumable;
use crate::primitives::{
    DEFAULT_LIMIT_END, DEFAULT_SLUG_SEPARATOR, DEFAULT_SNAKE_DELIMITER, KEBAB_DELIMITER,
};
use crate::strings;
use crate::types::StrError;
use std::fmt;
use std::str::FromStr;

crate::enumable! {
    /// A string operation invokable through [`Str::call`].
    pub enum StrOp: &'static str {
        Slug = "slug",
        Snake = "snake",
        Kebab = "kebab",
        Camel = "camel",
        Studly = "studly",
        Title = "title",
        Headline = "headline",
        Upper = "upper",
        Lower = "lower",
        Ucfirst = "ucfirst",
        Lcfirst = "lcfirst",
        Limit = "limit",
        Start = "start",
        Finish = "finish",
        Reverse = "reverse",
        Squish = "squish",
    }
}

impl StrOp {
    /// Minimum and maximum number of arguments.
    #[must_use]
    pub const fn arity(self) -> (usize, usize) {
        match self {
            StrOp::Slug | StrOp::Snake => (0, 1),
            StrOp::Limit => (1, 2),
            StrOp::Start | StrOp::Finish => (1, 1),
            _ => (0, 0),
        }
    }
}

// Hand-written so that `_` and `-` are ignored anywhere in the name and the
// lookup runs over `StrOp::cases()`, keeping the accepted names in one table.
impl FromStr for StrOp {
    type Err = StrError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "pascal" => Ok(StrOp::Studly),
            other => StrOp::cases()
                .iter()
                .copied()
                .find(|op| op.value() == other)
                .ok_or_else(|| StrError::UnknownOperation(name.to_string())),
        }
    }
}

impl fmt::Display for StrOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

// =============================================================================
// STR PROXY
// =============================================================================

/// A string bound for transformation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Str {
    value: String,
}

impl Str {
    /// Bind a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The bound string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    pub fn slug(&self) -> String {
        self.slug_with(DEFAULT_SLUG_SEPARATOR)
    }

    pub fn slug_with(&self, separator: &str) -> String {
        strings::slug(&self.value, separator)
    }

    pub fn snake(&self) -> String {
        self.snake_with(DEFAULT_SNAKE_DELIMITER)
    }

    pub fn snake_with(&self, delimiter: &str) -> String {
        strings::snake(&self.value, delimiter)
    }

    pub fn kebab(&self) -> String {
        strings::snake(&self.value, KEBAB_DELIMITER)
    }

    pub fn camel(&self) -> String {
        strings::camel(&self.value)
    }

    pub fn studly(&self) -> String {
        strings::studly(&self.value)
    }

    pub fn title(&self) -> String {
        strings::title(&self.value)
    }

    pub fn headline(&self) -> String {
        strings::headline(&self.value)
    }

    pub fn upper(&self) -> String {
        self.value.to_uppercase()
    }

    pub fn lower(&self) -> String {
        self.value.to_lowercase()
    }

    pub fn ucfirst(&self) -> String {
        strings::ucfirst(&self.value)
    }

    pub fn lcfirst(&self) -> String {
        strings::lcfirst(&self.value)
    }

    /// At most `count` characters, followed by `...` when truncated.
    pub fn limit(&self, count: usize) -> String {
        self.limit_with(count, DEFAULT_LIMIT_END)
    }

    pub fn limit_with(&self, count: usize, end: &str) -> String {
        strings::limit(&self.value, count, end)
    }

    pub fn start(&self, prefix: &str) -> String {
        strings::start(&self.value, prefix)
    }

    pub fn finish(&self, cap: &str) -> String {
        strings::finish(&self.value, cap)
    }

    pub fn reverse(&self) -> String {
        strings::reverse(&self.value)
    }

    pub fn squish(&self) -> String {
        strings::squish(&self.value)
    }

    /// Apply `op` with positional `args`.
    ///
    /// # Errors
    /// - `StrError::MissingArgument` / `StrError::TooManyArguments` when
    ///   `args` does not fit the operation's arity
    /// - `StrError::InvalidArgument` when `limit` gets a non-numeric count
    pub fn apply(&self, op: StrOp, args: &[&str]) -> Result<String, StrError> {
        let (min, max) = op.arity();
        if args.len() > max {
            return Err(StrError::TooManyArguments {
                op: op.value(),
                max,
                got: args.len(),
            });
        }
        if args.len() < min {
            return Err(StrError::MissingArgument {
                op: op.value(),
                index: args.len(),
            });
        }

        let output = match op {
            StrOp::Slug => self.slug_with(args.first().copied().unwrap_or(DEFAULT_SLUG_SEPARATOR)),
            StrOp::Snake => {
                self.snake_with(args.first().copied().unwrap_or(DEFAULT_SNAKE_DELIMITER))
            }
            StrOp::Kebab => self.kebab(),
            StrOp::Camel => self.camel(),
            StrOp::Studly => self.studly(),
            StrOp::Title => self.title(),
            StrOp::Headline => self.headline(),
            StrOp::Upper => self.upper(),
            StrOp::Lower => self.lower(),
            StrOp::Ucfirst => self.ucfirst(),
            StrOp::Lcfirst => self.lcfirst(),
            StrOp::Limit => {
                let raw = args.first().copied().unwrap_or_default();
                let count = raw.trim().parse::<usize>().map_err(|_| StrError::InvalidArgument {
                    op: op.value(),
                    arg: raw.to_string(),
                })?;
                self.limit_with(count, args.get(1).copied().unwrap_or(DEFAULT_LIMIT_END))
            }
            StrOp::Start => self.start(args.first().copied().unwrap_or_default()),
            StrOp::Finish => self.finish(args.first().copied().unwrap_or_default()),
            StrOp::Reverse => self.reverse(),
            StrOp::Squish => self.squish(),
        };

        Ok(output)
    }

    /// Apply the operation registered under `name`.
    ///
    /// # Errors
    /// `StrError::UnknownOperation` for an unregistered name, plus every
    /// error [`Str::apply`] returns.
    pub fn call(&self, name: &str, args: &[&str]) -> Result<String, StrError> {
        let result = name.parse::<StrOp>().and_then(|op| self.apply(op, args));
        if let Err(e) = &result {
            tracing::debug!(operation = name, error = %e, "string operation rejected");
        }
        result
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<Str> for String {
    fn from(value: Str) -> Self {
        value.value
    }
}

// =============================================================================
// TESTS
// =============================================================================
