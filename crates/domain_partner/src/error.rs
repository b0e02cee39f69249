//! Partner domain errors

use thiserror::Error;

/// Errors that can occur in the partner domain
#[derive(Debug, Error)]
pub enum PartnerError {
    /// Partner service with the given ID was not found
    #[error("Partner service not found: {0}")]
    PartnerNotFound(String),

    /// Customer with the given ID was not found
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// A customer with this email already exists
    #[error("Duplicate customer email: {0}")]
    DuplicateEmail(String),

    /// Partner-role user has no partner service attached
    #[error("User '{0}' has no partner service affiliation")]
    MissingPartnerAffiliation(String),

    /// Role token did not parse
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Entity validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl PartnerError {
    /// Creates a ValidationFailed error from accumulated validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PartnerError::ValidationFailed(errors.join("; "))
    }
}
