//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::NaiveDate;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use core_kernel::{CustomerId, PartnerServiceId, UserId};
use domain_claims::{ClaimType, VehicleInfo, VehicleType, WarrantyClaim};
use domain_partner::Customer;

use crate::fixtures::IdFixtures;

/// Builder for constructing test warranty claims
pub struct TestClaimBuilder {
    claim_type: ClaimType,
    customer_id: CustomerId,
    vehicle: VehicleInfo,
    defect_category: String,
    defect_description: String,
    partner_service_id: PartnerServiceId,
    created_by: UserId,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_type: ClaimType::Repair,
            customer_id: IdFixtures::customer_id(),
            vehicle: VehicleInfo {
                driver_name: "Mehmet Aksoy".to_string(),
                driver_phone: "+90 555 111 2233".to_string(),
                vehicle_type: VehicleType::CurtainSider,
                defect_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
                chassis_number: 90210431,
                registration_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
                kilometres: 180_500,
            },
            defect_category: "Brakes".to_string(),
            defect_description: "Uneven pad wear on rear axle".to_string(),
            partner_service_id: IdFixtures::partner_service_id(),
            created_by: IdFixtures::user_id(),
        }
    }

    /// Sets the claim type
    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = claim_type;
        self
    }

    /// Sets the customer
    pub fn with_customer_id(mut self, id: CustomerId) -> Self {
        self.customer_id = id;
        self
    }

    /// Sets the vehicle type
    pub fn with_vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle.vehicle_type = vehicle_type;
        self
    }

    /// Sets the owning partner service
    pub fn with_partner_service_id(mut self, id: PartnerServiceId) -> Self {
        self.partner_service_id = id;
        self
    }

    /// Sets the creating user
    pub fn with_created_by(mut self, id: UserId) -> Self {
        self.created_by = id;
        self
    }

    /// Sets the defect fields
    pub fn with_defect(
        mut self,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.defect_category = category.into();
        self.defect_description = description.into();
        self
    }

    /// Builds the claim in `New` status
    pub fn build(self) -> WarrantyClaim {
        WarrantyClaim::open(
            self.claim_type,
            self.customer_id,
            self.vehicle,
            self.defect_category,
            self.defect_description,
            self.partner_service_id,
            self.created_by,
        )
    }
}

/// Builder for constructing test customers with randomized identity data
pub struct TestCustomerBuilder {
    partner_service_id: PartnerServiceId,
    email: Option<String>,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    pub fn new() -> Self {
        Self {
            partner_service_id: IdFixtures::partner_service_id(),
            email: None,
        }
    }

    /// Sets the owning partner service
    pub fn with_partner_service_id(mut self, id: PartnerServiceId) -> Self {
        self.partner_service_id = id;
        self
    }

    /// Pins the email instead of generating one
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the customer, faking unpinned identity fields
    pub fn build(self) -> Customer {
        Customer {
            id: CustomerId::new_v7(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            company: CompanyName().fake(),
            email: self.email.unwrap_or_else(|| SafeEmail().fake()),
            phone: "+90 555 000 0000".to_string(),
            city: CityName().fake(),
            country: "Turkey".to_string(),
            address: "Test Cd. 1".to_string(),
            partner_service_id: self.partner_service_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::ClaimStatus;

    #[test]
    fn test_claim_builder_defaults() {
        let claim = TestClaimBuilder::new().build();
        assert_eq!(claim.status, ClaimStatus::New);
        assert_eq!(claim.claim_type, ClaimType::Repair);
    }

    #[test]
    fn test_claim_builder_overrides() {
        let partner_id = IdFixtures::partner_service_id();
        let claim = TestClaimBuilder::new()
            .with_claim_type(ClaimType::Bulletin)
            .with_vehicle_type(VehicleType::Tanker)
            .with_partner_service_id(partner_id)
            .build();

        assert_eq!(claim.claim_type, ClaimType::Bulletin);
        assert_eq!(claim.vehicle.vehicle_type, VehicleType::Tanker);
        assert_eq!(claim.partner_service_id, partner_id);
    }

    #[test]
    fn test_customer_builder_generates_identity() {
        let customer = TestCustomerBuilder::new().build();
        assert!(!customer.first_name.is_empty());
        assert!(customer.email.contains('@'));
    }
}
