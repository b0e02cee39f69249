//! Catalog handlers
//!
//! The part-info and labour-info endpoints back the claim form's code
//! lookup: given a code and currency they return the priced catalog
//! entry, 400 when a parameter is missing, 404 when the code is unknown.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use core_kernel::Currency;
use domain_catalog::{CatalogError, Labour, PriceTable, SparePart};
use infra_db::CatalogRepository;

use crate::auth::AuthUser;
use crate::dto::catalog::*;
use crate::{error::ApiError, AppState};

/// Resolves a spare part by stock code and currency
pub async fn part_info(
    State(state): State<AppState>,
    Query(params): Query<PartInfoParams>,
) -> Result<Json<PartInfoResponse>, ApiError> {
    let stock_code = require_param(params.stock_code, "stock_code")?;
    let currency = parse_currency(require_param(params.currency, "currency")?)?;

    let part = CatalogRepository::new(state.pool.clone())
        .find_part_by_stock_code(&stock_code)
        .await?
        .ok_or(CatalogError::CodeNotFound(stock_code))?;

    Ok(Json(part.quote(currency).into()))
}

/// Resolves a labour entry by code and currency
pub async fn labour_info(
    State(state): State<AppState>,
    Query(params): Query<LabourInfoParams>,
) -> Result<Json<LabourInfoResponse>, ApiError> {
    let code = require_param(params.code, "code")?;
    let currency = parse_currency(require_param(params.currency, "currency")?)?;

    let labour = CatalogRepository::new(state.pool.clone())
        .find_labour_by_code(&code)
        .await?
        .ok_or(CatalogError::CodeNotFound(code))?;

    Ok(Json(labour.quote(currency).into()))
}

/// Lists the spare part catalog
pub async fn list_parts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PartResponse>>, ApiError> {
    let parts = CatalogRepository::new(state.pool.clone()).list_parts().await?;
    Ok(Json(parts.iter().map(Into::into).collect()))
}

/// Lists the labour catalog
pub async fn list_labours(
    State(state): State<AppState>,
) -> Result<Json<Vec<LabourResponse>>, ApiError> {
    let labours = CatalogRepository::new(state.pool.clone())
        .list_labours()
        .await?;
    Ok(Json(labours.iter().map(Into::into).collect()))
}

/// Adds a spare part to the catalog (central administrators)
pub async fn create_part(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreatePartRequest>,
) -> Result<(StatusCode, Json<PartResponse>), ApiError> {
    if !auth.role().can_manage_catalog() {
        return Err(ApiError::Forbidden(
            "only central administrators manage the catalog".to_string(),
        ));
    }
    request.validate()?;

    let part = SparePart::new(
        request.stock_code,
        request.description,
        PriceTable::new(
            request.price_usd,
            request.price_eur,
            request.price_gbp,
            request.price_try,
        ),
    )?;

    CatalogRepository::new(state.pool.clone())
        .insert_part(&part)
        .await?;

    Ok((StatusCode::CREATED, Json((&part).into())))
}

/// Adds a labour entry to the catalog (central administrators)
pub async fn create_labour(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateLabourRequest>,
) -> Result<(StatusCode, Json<LabourResponse>), ApiError> {
    if !auth.role().can_manage_catalog() {
        return Err(ApiError::Forbidden(
            "only central administrators manage the catalog".to_string(),
        ));
    }
    request.validate()?;

    let labour = Labour::new(
        request.code,
        request.description,
        PriceTable::new(
            request.rate_usd,
            request.rate_eur,
            request.rate_gbp,
            request.rate_try,
        ),
    )?;

    CatalogRepository::new(state.pool.clone())
        .insert_labour(&labour)
        .await?;

    Ok((StatusCode::CREATED, Json((&labour).into())))
}

fn require_param(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::missing_parameter(name))
}

fn parse_currency(raw: String) -> Result<Currency, ApiError> {
    raw.parse::<Currency>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
