//! Structured conversion errors
//!
//! Every failure is local and caller-correctable. Nothing here is retried and
//! nothing leaves side effects behind; the front-end decides how to show it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const AMBIGUOUS_UNIT: &str = "AMBIGUOUS_UNIT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const INVALID_CATALOG: &str = "INVALID_CATALOG";
}

/// Errors raised by catalog lookups, conversion and input parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Category name did not resolve
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    /// One or more unit names did not resolve inside the category
    #[error("unknown unit{} in {category}: {}", plural(.names), .names.join(", "))]
    UnknownUnit { category: String, names: Vec<String> },

    /// A bare unit token matched no unit in any category
    #[error("unknown unit: {name}")]
    UnitNotFound { name: String },

    /// A bare unit token matched units in more than one category
    #[error("unit '{name}' is ambiguous, found in: {}", .categories.join(", "))]
    AmbiguousUnit { name: String, categories: Vec<String> },

    /// Units belong to different categories
    #[error("cannot convert {from} to {to}: units belong to different categories")]
    IncompatibleUnits { from: String, to: String },

    /// Malformed numeric or expression text
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Catalog construction broke an invariant
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

fn plural(names: &[String]) -> &'static str {
    if names.len() > 1 { "s" } else { "" }
}

impl ConvertError {
    pub fn unknown_category(name: impl Into<String>) -> Self {
        ConvertError::UnknownCategory { name: name.into() }
    }

    pub fn unknown_unit(category: impl Into<String>, names: Vec<String>) -> Self {
        ConvertError::UnknownUnit { category: category.into(), names }
    }

    pub fn unit_not_found(name: impl Into<String>) -> Self {
        ConvertError::UnitNotFound { name: name.into() }
    }

    pub fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvertError::InvalidInput { input: input.into(), reason: reason.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::UnknownCategory { .. } => codes::UNKNOWN_CATEGORY,
            ConvertError::UnknownUnit { .. } | ConvertError::UnitNotFound { .. } => codes::UNKNOWN_UNIT,
            ConvertError::AmbiguousUnit { .. } => codes::AMBIGUOUS_UNIT,
            ConvertError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            ConvertError::InvalidInput { .. } => codes::INVALID_INPUT,
            ConvertError::InvalidCatalog(_) => codes::INVALID_CATALOG,
        }
    }

    /// Hint for fixing the error, if there is a useful one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::UnknownCategory { .. } => {
                Some("Use list_categories to see available categories".to_string())
            }
            ConvertError::UnknownUnit { category, .. } => {
                Some(format!("Use list_units(\"{}\") to see available units", category))
            }
            ConvertError::UnitNotFound { .. } => {
                Some("Use list_categories, then list_units, to see available units".to_string())
            }
            ConvertError::AmbiguousUnit { categories, .. } => {
                Some(format!("Name the category explicitly, one of: {}", categories.join(", ")))
            }
            ConvertError::IncompatibleUnits { .. } => {
                Some("Pick two units from the same category".to_string())
            }
            ConvertError::InvalidInput { .. } => {
                Some("Enter a finite decimal number, e.g. 42 or -1.5e3".to_string())
            }
            ConvertError::InvalidCatalog(_) => None,
        }
    }

    /// Serializable view for front-ends
    pub fn report(&self) -> ErrorReport {
        ErrorReport::from(self)
    }
}

/// Wire form of a [`ConvertError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        ErrorReport {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}
