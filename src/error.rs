//! Error types for the OriginTrace platform core.
//!
//! All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`]. Fallible operations across the crate return
//! [`Result`].

use thiserror::Error;

/// Result type alias for platform operations.
///
/// This is a convenience type that uses [`PlatformError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Errors that can occur in the platform core.
///
/// All variants include contextual information about what went wrong. The
/// messages are user-facing: every one of them backs a form field or
/// confirmation screen somewhere in the product.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum PlatformError {
    /// A display-format date string (`DD/MM/YYYY`) could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A service package identifier failed validation.
    #[error("Invalid package ID: {0}")]
    InvalidPackageId(String),

    /// A product identifier failed validation.
    #[error("Invalid product ID: {0}")]
    InvalidProductId(String),

    /// A production entity identifier failed validation.
    #[error("Invalid entity ID: {0}")]
    InvalidEntityId(String),

    /// A product was looked up or modified that does not exist in the store.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// A renewal order failed submission validation.
    #[error("Invalid renewal order: {0}")]
    OrderError(String),

    /// Payment confirmation was attempted without acceptable proof.
    #[error("Invalid payment proof: {0}")]
    InvalidPaymentProof(String),

    /// A logbook record was rejected.
    #[error("Invalid logbook entry: {0}")]
    LogbookError(String),

    /// A wizard transition was requested from the wrong state.
    #[error("Invalid wizard transition: {0}")]
    WizardState(String),

    /// A profile field update failed validation.
    #[error("Invalid profile field: {0}")]
    ProfileError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PlatformError::InvalidDate("31/02/2025".into());
        assert_eq!(error.to_string(), "Invalid date: 31/02/2025");
    }

    #[test]
    fn test_order_error() {
        let error = PlatformError::OrderError("order has no line items".into());
        assert!(error.to_string().contains("Invalid renewal order"));
    }

    #[test]
    fn test_wizard_state_error() {
        let error = PlatformError::WizardState("select a task group first".into());
        assert_eq!(error.to_string(), "Invalid wizard transition: select a task group first");
    }
}
