// ============================================================================
// domain/error.rs - FIELD VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every entity constructor and setter reports failures through this type.
/// All errors are:
/// - Cloneable (callers may keep them for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Absence (a required field was never supplied)
    // ========================================================================
    #[error("{field} is required")]
    MissingValue { field: &'static str },

    // ========================================================================
    // Rule violations (present, but breaks a domain rule)
    // ========================================================================
    #[error("{field} {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl DomainError {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingValue { field }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingValue { field } | Self::InvalidValue { field, .. } => field,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingValue { field } => vec![
                format!("Provide a value for '{field}'"),
                "Every field of an entity is required".into(),
            ],
            Self::InvalidValue { field, reason } => {
                let mut hints = vec![format!("'{field}' {reason}")];
                match *field {
                    "email" => hints.push("Expected a form like name@example.com".into()),
                    f if f.ends_with("date") => {
                        hints.push("Dates use the YYYY-MM-DD format".into())
                    }
                    _ => {}
                }
                hints
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingValue { .. } => ErrorCategory::Missing,
            Self::InvalidValue { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Missing,
    Validation,
}
