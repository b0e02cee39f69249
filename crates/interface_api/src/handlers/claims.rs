//! Claims handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{Currency, CustomerId};
use domain_catalog::CatalogError;
use domain_claims::{
    ClaimLabour, ClaimSparePart, ClaimStatus, ClaimSubmission, ClaimType, VehicleInfo,
    VehicleType, WarrantyClaim,
};
use infra_db::{CatalogRepository, ClaimsRepository};

use crate::auth::AuthUser;
use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Creates a claim with its line items
///
/// Partner roles only. The owning partner service and the creating user
/// come from the token, never from the request body.
pub async fn create_claim(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<ClaimDetailResponse>), ApiError> {
    if !auth.role().can_create_claims() {
        return Err(ApiError::Forbidden(
            "only partner roles can file claims".to_string(),
        ));
    }
    request.validate()?;

    let partner_id = auth
        .user
        .partner_affiliation()?
        .ok_or_else(|| ApiError::Forbidden("no partner affiliation".to_string()))?;

    let claim_type: ClaimType = request.claim_type.parse()?;
    let vehicle_type: VehicleType = request.vehicle_type.parse()?;

    let claim = WarrantyClaim::open(
        claim_type,
        CustomerId::from_uuid(request.customer_id),
        VehicleInfo {
            driver_name: request.driver_name,
            driver_phone: request.driver_phone,
            vehicle_type,
            defect_date: request.defect_date,
            chassis_number: request.chassis_number,
            registration_date: request.registration_date,
            kilometres: request.kilometres,
        },
        request.defect_category,
        request.defect_description,
        partner_id,
        auth.user.id,
    );

    let catalog = CatalogRepository::new(state.pool.clone());

    let mut parts = Vec::with_capacity(request.parts.len());
    for input in &request.parts {
        let currency = parse_currency(&input.currency)?;
        let part = catalog
            .find_part_by_stock_code(&input.stock_code)
            .await?
            .ok_or_else(|| CatalogError::CodeNotFound(input.stock_code.clone()))?;
        parts.push(ClaimSparePart::snapshot(
            claim.id,
            &part,
            currency,
            input.quantity,
        )?);
    }

    let mut labours = Vec::with_capacity(request.labours.len());
    for input in &request.labours {
        let currency = parse_currency(&input.currency)?;
        let labour = catalog
            .find_labour_by_code(&input.code)
            .await?
            .ok_or_else(|| CatalogError::CodeNotFound(input.code.clone()))?;
        labours.push(ClaimLabour::snapshot(
            claim.id,
            &labour,
            currency,
            input.duration,
        )?);
    }

    let submission = ClaimSubmission::new(claim, parts, labours);
    submission.validate()?;

    let repo = ClaimsRepository::new(state.pool.clone());
    repo.create(&submission).await?;

    let detail = repo
        .get_with_items(Uuid::from(submission.claim.id))
        .await?;
    Ok((StatusCode::CREATED, Json((&detail).into())))
}

/// Lists claims visible to the caller
///
/// Partner roles see their own partner's claims; central roles see all.
pub async fn list_claims(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let scope = auth.claim_scope()?;
    let claims = ClaimsRepository::new(state.pool.clone()).list(scope).await?;

    Ok(Json(claims.iter().map(Into::into).collect()))
}

/// Gets a claim with line items
///
/// Claims outside the caller's scope read as absent rather than
/// forbidden, so partners cannot probe for other partners' claim ids.
pub async fn get_claim(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClaimDetailResponse>, ApiError> {
    let scope = auth.claim_scope()?;
    let detail = ClaimsRepository::new(state.pool.clone())
        .get_with_items(id)
        .await?;

    if !scope.allows(detail.claim.partner_service_id) {
        return Err(ApiError::NotFound(format!(
            "Claim with id '{id}' not found"
        )));
    }

    Ok(Json((&detail).into()))
}

/// Moves a claim through the review workflow
///
/// Central roles record review outcomes (needs_revise, accepted,
/// rejected, completed) together with approved part quantities; partner
/// roles may only resubmit their own claim as revised.
pub async fn update_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let status: ClaimStatus = request.status.parse()?;
    let repo = ClaimsRepository::new(state.pool.clone());
    let detail = repo.get_with_items(id).await?;

    if status == ClaimStatus::Revised {
        if !auth.role().can_create_claims() {
            return Err(ApiError::Forbidden(
                "only partner roles resubmit claims".to_string(),
            ));
        }
        let scope = auth.claim_scope()?;
        if !scope.allows(detail.claim.partner_service_id) {
            return Err(ApiError::NotFound(format!(
                "Claim with id '{id}' not found"
            )));
        }
    } else if !auth.role().can_review_claims() {
        return Err(ApiError::Forbidden(
            "only central roles review claims".to_string(),
        ));
    }

    // Validate the transition before touching the database
    let mut claim = detail.claim.clone();
    claim.update_status(status)?;

    if !request.approved_parts.is_empty() {
        if !auth.role().can_review_claims() {
            return Err(ApiError::Forbidden(
                "only central roles approve quantities".to_string(),
            ));
        }
        for approval in &request.approved_parts {
            let mut line = detail
                .parts
                .iter()
                .find(|p| Uuid::from(p.id) == approval.claim_part_id)
                .cloned()
                .ok_or_else(|| {
                    ApiError::NotFound(format!(
                        "Claim part with id '{}' not found",
                        approval.claim_part_id
                    ))
                })?;
            line.approve_quantity(approval.approved_quantity)?;
            repo.approve_part_quantity(id, approval.claim_part_id, approval.approved_quantity)
                .await?;
        }
    }

    let updated = repo
        .update_status(id, status, request.reason.as_deref())
        .await?;
    Ok(Json(ClaimResponse::from(&updated)))
}

/// Attaches a spare part line item to an existing claim
pub async fn add_part(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<ClaimPartInput>,
) -> Result<(StatusCode, Json<ClaimDetailResponse>), ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());
    let claim = authorize_line_item_change(&auth, &repo, id).await?;

    let currency = parse_currency(&input.currency)?;
    let part = CatalogRepository::new(state.pool.clone())
        .find_part_by_stock_code(&input.stock_code)
        .await?
        .ok_or_else(|| CatalogError::CodeNotFound(input.stock_code.clone()))?;

    let line = ClaimSparePart::snapshot(claim.id, &part, currency, input.quantity)?;
    repo.add_part(&line).await?;

    let detail = repo.get_with_items(id).await?;
    Ok((StatusCode::CREATED, Json((&detail).into())))
}

/// Attaches a labour line item to an existing claim
pub async fn add_labour(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(input): Json<ClaimLabourInput>,
) -> Result<(StatusCode, Json<ClaimDetailResponse>), ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());
    let claim = authorize_line_item_change(&auth, &repo, id).await?;

    let currency = parse_currency(&input.currency)?;
    let labour = CatalogRepository::new(state.pool.clone())
        .find_labour_by_code(&input.code)
        .await?
        .ok_or_else(|| CatalogError::CodeNotFound(input.code.clone()))?;

    let line = ClaimLabour::snapshot(claim.id, &labour, currency, input.duration)?;
    repo.add_labour(&line).await?;

    let detail = repo.get_with_items(id).await?;
    Ok((StatusCode::CREATED, Json((&detail).into())))
}

/// Checks that the caller may change line items on this claim
async fn authorize_line_item_change(
    auth: &AuthUser,
    repo: &ClaimsRepository,
    id: Uuid,
) -> Result<WarrantyClaim, ApiError> {
    if !auth.role().can_create_claims() {
        return Err(ApiError::Forbidden(
            "only partner roles change claim line items".to_string(),
        ));
    }

    let claim = repo.get_by_id(id).await?;
    let scope = auth.claim_scope()?;
    if !scope.allows(claim.partner_service_id) {
        return Err(ApiError::NotFound(format!(
            "Claim with id '{id}' not found"
        )));
    }
    if claim.status.is_terminal() {
        return Err(ApiError::Conflict(format!(
            "claim {} is closed for changes",
            claim.claim_number
        )));
    }

    Ok(claim)
}

fn parse_currency(raw: &str) -> Result<Currency, ApiError> {
    raw.parse::<Currency>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
