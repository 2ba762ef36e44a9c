//! Common error infrastructure for planner-core.
//!
//! Domain-specific errors (`OptimizeError`, `LevelError`, `ClassError`,
//! `ConfigError`) live next to the operations they guard. This module only
//! provides the classification shared by all of them.
//!
//! Scoring and allocation never fail for in-range input: unmet requirements
//! are a score penalty and an exhausted search is an early stop. Errors are
//! reserved for input that is rejected before any optimization starts.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same request may succeed later.
    ///
    /// Examples: a newer request superseded this one
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: empty weapon selection, unknown starting class
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - the planner cannot continue with this setup.
    ///
    /// Examples: contradictory configuration
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error should be shown to the user as-is.
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Display text is user-facing; keep it a complete sentence fragment
/// - Classify severity based on recoverability, not impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
