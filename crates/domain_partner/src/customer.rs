//! Customer entity

use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, PartnerServiceId};

/// An end-customer served by a partner service
///
/// The email address is unique across all customers; the storage layer
/// enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub address: String,
    /// The partner service this customer belongs to
    pub partner_service_id: PartnerServiceId,
}

impl Customer {
    /// Full name for display purposes
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
