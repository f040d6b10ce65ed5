//! Common error infrastructure for calc-core.
//!
//! Engines fail closed: public entry points return `Option` and the `try_*`
//! twins surface the reason as a typed error. Domain-specific errors
//! ([`LookupError`](crate::data::LookupError), [`DataError`](crate::data::DataError))
//! live beside the data they describe and implement [`CalcError`].

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: the caller asked for something the bundle does not contain
/// - **Internal**: the bundle contradicts itself (dangling reference)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid request against valid data.
    ///
    /// Examples: unknown weapon name, upgrade level above the maximum
    Validation,

    /// Data integrity problem inside the bundle.
    ///
    /// Examples: curve id referenced by a weapon but missing from `curves`
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates broken data rather than a bad request.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all calc-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to fix it: caller or data build
pub trait CalcError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
