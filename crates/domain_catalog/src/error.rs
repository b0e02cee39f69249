//! Catalog domain errors

use thiserror::Error;

/// Errors that can occur in the catalog domain
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No catalog entry exists for the given stock/labour code
    #[error("Unknown code: {0}")]
    CodeNotFound(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),
}
