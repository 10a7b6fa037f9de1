//! Strongly-typed value objects used by the pagination layer.
//!
//! These wrappers enforce basic invariants (positive page numbers, bounded
//! page sizes, non-empty query labels) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided number is zero.
    #[error("value must be greater than zero")]
    NonPositive,
    /// Provided page size exceeds the configured maximum.
    #[error("items per page must not exceed {max}")]
    TooManyItemsPerPage { max: usize },
    /// Provided string was empty.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Macro to generate lightweight newtypes for positive counters.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new value ensuring it is greater than zero.
            pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositive)
                }
            }

            /// Returns the raw `usize` backing this value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(PageNumber, "One-based page number.");
positive_newtype!(ItemsPerPage, "Number of items shown on a single page.");

impl PageNumber {
    /// The first page, used as the fallback for missing or invalid input.
    pub const FIRST: Self = Self(1);
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl ItemsPerPage {
    /// Creates a page size bounded by `max`.
    pub fn bounded(value: usize, max: usize) -> Result<Self, TypeConstraintError> {
        let value = Self::new(value)?;
        if value.0 > max {
            return Err(TypeConstraintError::TooManyItemsPerPage { max });
        }
        Ok(value)
    }
}

/// Label of a query parameter carried through pagination links.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct QueryLabel(String);

impl QueryLabel {
    /// Keeps the label verbatim, rejecting only the empty string.
    pub fn new<S: Into<String>>(label: S) -> Result<Self, TypeConstraintError> {
        let label = label.into();
        if label.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(label))
        }
    }

    /// Borrow the label as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for QueryLabel {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for QueryLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for QueryLabel {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for QueryLabel {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
