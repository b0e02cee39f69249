//! Claims domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Claim must contain at least one spare part or labour item")]
    EmptyClaim,

    #[error("Quantity {actual} is below the minimum of {minimum}")]
    QuantityBelowMinimum { minimum: u32, actual: u32 },

    #[error("Duration {actual} is below the minimum of {minimum}")]
    DurationBelowMinimum { minimum: Decimal, actual: Decimal },

    #[error("Approved quantity {approved} exceeds requested quantity {requested}")]
    ApprovedQuantityExceedsRequested { requested: u32, approved: u32 },

    #[error("Line item for '{0}' already present on the claim")]
    DuplicateLineItem(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Validation error: {0}")]
    Validation(String),
}
