//! # Error Types
//!
//! Domain-specific error types for lounge-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lounge-core errors (this file)                                        │
//! │  ├── CoreError        - Menu / tariff rule violations                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  lounge-desk errors (in app)                                           │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Billing itself never fails: unset times, missing consoles and negative
//! quantity steps all degrade to zero. These errors only guard how menus
//! and tariffs are built.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu position that does not exist was addressed.
    #[error("Menu item not found at index {index} (menu has {len} items)")]
    UnknownMenuItem { index: usize, len: usize },

    /// Tariff rates break the pricing rules.
    ///
    /// ## When This Occurs
    /// - A rate is negative
    /// - The premium console is not more expensive than the standard one
    #[error("Invalid tariff: {reason}")]
    InvalidTariff { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when configuration or menu definitions don't meet
/// requirements.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., "1.234" as an amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two menu items with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownMenuItem { index: 7, len: 5 };
        assert_eq!(
            err.to_string(),
            "Menu item not found at index 7 (menu has 5 items)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "menu item".to_string(),
            value: "Cola".to_string(),
        };
        assert_eq!(err.to_string(), "menu item 'Cola' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
