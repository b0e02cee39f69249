//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_catalog::CatalogError;
use domain_claims::ClaimError;
use domain_partner::PartnerError;
use infra_db::DatabaseError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// Convenience constructor for a missing query parameter
    pub fn missing_parameter(name: &str) -> Self {
        ApiError::BadRequest(format!("missing parameter: {name}"))
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.clone(),
            ),
            ApiError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.clone(),
            ),
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::NotFound(msg),
            DatabaseError::DuplicateEntry(msg) => ApiError::Conflict(msg),
            DatabaseError::ForeignKeyViolation(msg) => ApiError::BadRequest(msg),
            DatabaseError::ConstraintViolation(msg) => ApiError::Validation(msg),
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::ClaimNotFound(msg) => ApiError::NotFound(msg),
            ClaimError::DuplicateLineItem(_) | ClaimError::InvalidStatusTransition { .. } => {
                ApiError::Conflict(err.to_string())
            }
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::CodeNotFound(code) => {
                ApiError::NotFound(format!("Unknown code: {code}"))
            }
            CatalogError::InvalidCode(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<PartnerError> for ApiError {
    fn from(err: PartnerError) -> Self {
        match err {
            PartnerError::PartnerNotFound(msg) => ApiError::NotFound(msg),
            PartnerError::CustomerNotFound(msg) => ApiError::NotFound(msg),
            PartnerError::DuplicateEmail(msg) => ApiError::Conflict(msg),
            PartnerError::MissingPartnerAffiliation(_) => ApiError::Forbidden(err.to_string()),
            PartnerError::UnknownRole(_) => ApiError::Unauthorized,
            PartnerError::ValidationFailed(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_unknown_code_maps_to_not_found() {
        let err: ApiError = CatalogError::CodeNotFound("XYZ-999".to_string()).into();
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_claim_maps_to_unprocessable() {
        let err: ApiError = ClaimError::EmptyClaim.into();
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_quantity_minimum_maps_to_unprocessable() {
        let err: ApiError = ClaimError::QuantityBelowMinimum {
            minimum: 1,
            actual: 0,
        }
        .into();
        assert_eq!(status_of(err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_duplicate_line_item_maps_to_conflict() {
        let err: ApiError = ClaimError::DuplicateLineItem("ABC-123".to_string()).into();
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_duplicate_entry_maps_to_conflict() {
        let err: ApiError = DatabaseError::duplicate("Customer", "email", "a@b.example").into();
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_missing_affiliation_maps_to_forbidden() {
        let err: ApiError = PartnerError::MissingPartnerAffiliation("user".to_string()).into();
        assert_eq!(status_of(err), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_missing_parameter_maps_to_bad_request() {
        let err = ApiError::missing_parameter("stock_code");
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }
}
