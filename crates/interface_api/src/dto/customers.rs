//! Customer DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_partner::Customer;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    pub company: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub city: String,
    pub country: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomerListParams {
    /// Required for central roles; ignored for partner roles
    pub partner_service_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub partner_service_id: Uuid,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: Uuid::from(customer.id),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            company: customer.company.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            city: customer.city.clone(),
            country: customer.country.clone(),
            address: customer.address.clone(),
            partner_service_id: Uuid::from(customer.partner_service_id),
        }
    }
}
