//! Authentication and authorization

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use core_kernel::{PartnerServiceId, UserId};
use domain_partner::{ClaimScope, PartnerError, User, UserRole};

/// JWT claims carried by a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// Username, for audit logs
    pub username: String,
    /// User's role token
    pub role: String,
    /// Partner affiliation for partner roles
    pub partner_service_id: Option<Uuid>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Unknown role in token: {0}")]
    UnknownRole(String),
}

/// The authenticated caller, reconstructed from validated token claims
///
/// Handlers read the role and partner affiliation from here; the token is
/// the single source for both, so no user lookup runs per request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// The row filter this caller's claim queries run under
    pub fn claim_scope(&self) -> Result<ClaimScope, PartnerError> {
        ClaimScope::for_user(&self.user)
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }
}

impl TryFrom<TokenClaims> for AuthUser {
    type Error = AuthError;

    fn try_from(claims: TokenClaims) -> Result<Self, Self::Error> {
        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|_| AuthError::UnknownRole(claims.role.clone()))?;

        Ok(AuthUser {
            user: User {
                id: UserId::from_uuid(claims.sub),
                username: claims.username,
                role,
                partner_service_id: claims.partner_service_id.map(PartnerServiceId::from_uuid),
            },
        })
    }
}

/// Creates a new JWT token for a user
///
/// # Arguments
///
/// * `user` - The authenticated user
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(user: &User, secret: &str, expiration_secs: u64) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = TokenClaims {
        sub: Uuid::from(user.id),
        username: user.username.clone(),
        role: user.role.as_str().to_string(),
        partner_service_id: user.partner_service_id.map(Uuid::from),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}
