//! Partner service DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_partner::PartnerService;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePartnerRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct PartnerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<&PartnerService> for PartnerResponse {
    fn from(partner: &PartnerService) -> Self {
        Self {
            id: Uuid::from(partner.id),
            name: partner.name.clone(),
            email: partner.email.clone(),
            phone: partner.phone.clone(),
            address: partner.address.clone(),
        }
    }
}
