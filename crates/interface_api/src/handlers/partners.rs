//! Partner service handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use domain_partner::{PartnerError, PartnerService, PartnerValidator};
use infra_db::PartnerRepository;

use crate::auth::AuthUser;
use crate::dto::partners::*;
use crate::{error::ApiError, AppState};

/// Lists all partner services (central roles)
pub async fn list_partners(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<PartnerResponse>>, ApiError> {
    if !auth.role().can_view_all_claims() {
        return Err(ApiError::Forbidden(
            "partner directory is central-only".to_string(),
        ));
    }

    let partners = PartnerRepository::new(state.pool.clone())
        .list_partners()
        .await?;

    Ok(Json(partners.iter().map(Into::into).collect()))
}

/// Gets a partner service by id
///
/// Central roles read any partner; partner roles read their own record.
pub async fn get_partner(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<PartnerResponse>, ApiError> {
    if auth.role().is_partner() {
        let own = auth
            .user
            .partner_affiliation()?
            .ok_or_else(|| ApiError::Forbidden("no partner affiliation".to_string()))?;
        if Uuid::from(own) != id {
            return Err(ApiError::NotFound(format!(
                "Partner service with id '{id}' not found"
            )));
        }
    }

    let partner = PartnerRepository::new(state.pool.clone())
        .get_partner(id)
        .await?;

    Ok(Json((&partner).into()))
}

/// Registers a partner service (central administrators)
pub async fn create_partner(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreatePartnerRequest>,
) -> Result<(StatusCode, Json<PartnerResponse>), ApiError> {
    if !auth.role().can_manage_partners() {
        return Err(ApiError::Forbidden(
            "only central administrators manage partners".to_string(),
        ));
    }
    request.validate()?;

    let partner = PartnerService::new(
        request.name,
        request.email,
        request.phone,
        request.address,
    );

    let validation = PartnerValidator::validate_partner(&partner);
    if !validation.is_valid {
        return Err(PartnerError::validation_failed(validation.errors).into());
    }

    PartnerRepository::new(state.pool.clone())
        .create_partner(&partner)
        .await?;

    Ok((StatusCode::CREATED, Json((&partner).into())))
}
