//! Partner service entity

use serde::{Deserialize, Serialize};

use core_kernel::PartnerServiceId;

/// A partner (dealer/service) organization
///
/// Partner services own their customers and the claims their users file;
/// claim visibility is scoped to the owning partner for partner roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerService {
    pub id: PartnerServiceId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl PartnerService {
    /// Creates a new partner service
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: PartnerServiceId::new_v7(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_partner_service() {
        let partner = PartnerService::new(
            "Aegean Trailer Service",
            "service@aegean-trailer.example",
            "+90 232 555 0101",
            "Izmir, Kemalpasa OSB",
        );

        assert_eq!(partner.name, "Aegean Trailer Service");
        assert!(partner.id.to_string().starts_with("PRT-"));
    }
}
