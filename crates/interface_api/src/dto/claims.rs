//! Claims DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_claims::{ClaimLabour, ClaimSparePart, WarrantyClaim};
use infra_db::ClaimDetail;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub claim_type: String,
    pub customer_id: Uuid,
    #[validate(length(min = 1, message = "driver name is required"))]
    pub driver_name: String,
    #[validate(length(min = 1, message = "driver phone is required"))]
    pub driver_phone: String,
    pub vehicle_type: String,
    pub defect_date: NaiveDate,
    pub chassis_number: i64,
    pub registration_date: NaiveDate,
    #[validate(range(min = 0, message = "kilometres cannot be negative"))]
    pub kilometres: i32,
    #[validate(length(min = 1, message = "defect category is required"))]
    pub defect_category: String,
    #[validate(length(min = 1, message = "defect description is required"))]
    pub defect_description: String,
    #[serde(default)]
    pub parts: Vec<ClaimPartInput>,
    #[serde(default)]
    pub labours: Vec<ClaimLabourInput>,
}

#[derive(Debug, Deserialize)]
pub struct ClaimPartInput {
    pub stock_code: String,
    pub currency: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct ClaimLabourInput {
    pub code: String,
    pub currency: String,
    pub duration: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    pub reason: Option<String>,
    /// Approved quantities recorded alongside the review outcome
    #[serde(default)]
    pub approved_parts: Vec<ApprovedPartInput>,
}

#[derive(Debug, Deserialize)]
pub struct ApprovedPartInput {
    pub claim_part_id: Uuid,
    pub approved_quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: Uuid,
    pub claim_number: String,
    pub claim_type: String,
    pub customer_id: Uuid,
    pub status: String,
    pub vehicle_type: String,
    pub defect_category: String,
    pub partner_service_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&WarrantyClaim> for ClaimResponse {
    fn from(claim: &WarrantyClaim) -> Self {
        Self {
            id: Uuid::from(claim.id),
            claim_number: claim.claim_number.clone(),
            claim_type: claim.claim_type.as_str().to_string(),
            customer_id: Uuid::from(claim.customer_id),
            status: claim.status.as_str().to_string(),
            vehicle_type: claim.vehicle.vehicle_type.as_str().to_string(),
            defect_category: claim.defect_category.clone(),
            partner_service_id: Uuid::from(claim.partner_service_id),
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimDetailResponse {
    pub id: Uuid,
    pub claim_number: String,
    pub claim_type: String,
    pub customer_id: Uuid,
    pub status: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_type: String,
    pub defect_date: NaiveDate,
    pub chassis_number: i64,
    pub registration_date: NaiveDate,
    pub kilometres: i32,
    pub defect_category: String,
    pub defect_description: String,
    pub partner_service_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parts: Vec<ClaimPartResponse>,
    pub labours: Vec<ClaimLabourResponse>,
}

impl From<&ClaimDetail> for ClaimDetailResponse {
    fn from(detail: &ClaimDetail) -> Self {
        let claim = &detail.claim;
        Self {
            id: Uuid::from(claim.id),
            claim_number: claim.claim_number.clone(),
            claim_type: claim.claim_type.as_str().to_string(),
            customer_id: Uuid::from(claim.customer_id),
            status: claim.status.as_str().to_string(),
            driver_name: claim.vehicle.driver_name.clone(),
            driver_phone: claim.vehicle.driver_phone.clone(),
            vehicle_type: claim.vehicle.vehicle_type.as_str().to_string(),
            defect_date: claim.vehicle.defect_date,
            chassis_number: claim.vehicle.chassis_number,
            registration_date: claim.vehicle.registration_date,
            kilometres: claim.vehicle.kilometres,
            defect_category: claim.defect_category.clone(),
            defect_description: claim.defect_description.clone(),
            partner_service_id: Uuid::from(claim.partner_service_id),
            created_at: claim.created_at,
            updated_at: claim.updated_at,
            parts: detail.parts.iter().map(Into::into).collect(),
            labours: detail.labours.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimPartResponse {
    pub id: Uuid,
    pub stock_code: String,
    pub description: String,
    pub currency: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub approved_quantity: Option<u32>,
    pub total_price: Decimal,
}

impl From<&ClaimSparePart> for ClaimPartResponse {
    fn from(line: &ClaimSparePart) -> Self {
        Self {
            id: Uuid::from(line.id),
            stock_code: line.stock_code.clone(),
            description: line.description.clone(),
            currency: line.currency.code().to_string(),
            unit_price: line.unit_price.amount(),
            quantity: line.quantity,
            approved_quantity: line.approved_quantity,
            total_price: line.total_price.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimLabourResponse {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub currency: String,
    pub unit_rate: Decimal,
    pub duration: Decimal,
    pub total_price: Decimal,
}

impl From<&ClaimLabour> for ClaimLabourResponse {
    fn from(line: &ClaimLabour) -> Self {
        Self {
            id: Uuid::from(line.id),
            code: line.code.clone(),
            description: line.description.clone(),
            currency: line.currency.code().to_string(),
            unit_rate: line.unit_rate.amount(),
            duration: line.duration,
            total_price: line.total_price.amount(),
        }
    }
}
