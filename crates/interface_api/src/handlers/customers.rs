//! Customer handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::CustomerId;
use domain_partner::{Customer, PartnerError, PartnerValidator};
use infra_db::PartnerRepository;

use crate::auth::AuthUser;
use crate::dto::customers::*;
use crate::{error::ApiError, AppState};

/// Registers a customer under the caller's partner service
pub async fn create_customer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    if !auth.role().is_partner() {
        return Err(ApiError::Forbidden(
            "customers belong to partner services".to_string(),
        ));
    }
    request.validate()?;

    let partner_id = auth
        .user
        .partner_affiliation()?
        .ok_or_else(|| ApiError::Forbidden("no partner affiliation".to_string()))?;

    let customer = Customer {
        id: CustomerId::new_v7(),
        first_name: request.first_name,
        last_name: request.last_name,
        company: request.company,
        email: request.email,
        phone: request.phone,
        city: request.city,
        country: request.country,
        address: request.address,
        partner_service_id: partner_id,
    };

    let validation = PartnerValidator::validate_customer(&customer);
    if !validation.is_valid {
        return Err(PartnerError::validation_failed(validation.errors).into());
    }

    PartnerRepository::new(state.pool.clone())
        .create_customer(&customer)
        .await?;

    Ok((StatusCode::CREATED, Json((&customer).into())))
}

/// Lists customers
///
/// Partner roles list their own partner's customers; central roles pick
/// the partner through the query parameter.
pub async fn list_customers(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(params): Query<CustomerListParams>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let partner_id = if auth.role().is_partner() {
        Uuid::from(
            auth.user
                .partner_affiliation()?
                .ok_or_else(|| ApiError::Forbidden("no partner affiliation".to_string()))?,
        )
    } else {
        params
            .partner_service_id
            .ok_or_else(|| ApiError::missing_parameter("partner_service_id"))?
    };

    let customers = PartnerRepository::new(state.pool.clone())
        .list_customers_by_partner(partner_id)
        .await?;

    Ok(Json(customers.iter().map(Into::into).collect()))
}

/// Gets a customer by id
///
/// Partner roles only see customers of their own partner service.
pub async fn get_customer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = PartnerRepository::new(state.pool.clone())
        .get_customer(id)
        .await?;

    if auth.role().is_partner() {
        let partner_id = auth
            .user
            .partner_affiliation()?
            .ok_or_else(|| ApiError::Forbidden("no partner affiliation".to_string()))?;
        if customer.partner_service_id != partner_id {
            return Err(ApiError::NotFound(format!(
                "Customer with id '{id}' not found"
            )));
        }
    }

    Ok(Json((&customer).into()))
}
