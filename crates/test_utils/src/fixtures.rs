//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the
//! warranty system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use core_kernel::{ClaimId, Currency, CustomerId, Money, PartnerServiceId, UserId};
use domain_catalog::{Labour, PriceTable, SparePart};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard unit price used across snapshot tests
    pub fn eur_10() -> Money {
        Money::new(dec!(10.00), Currency::EUR)
    }

    /// A larger EUR amount
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// A zero amount
    pub fn eur_zero() -> Money {
        Money::zero(Currency::EUR)
    }
}

/// Fixture for catalog test data
pub struct CatalogFixtures;

impl CatalogFixtures {
    /// Canonical spare part used across pricing tests: ABC-123 at EUR 10.00
    pub fn brake_disc() -> SparePart {
        SparePart {
            id: core_kernel::SparePartId::new_v7(),
            stock_code: "ABC-123".to_string(),
            description: "Brake disc, ventilated".to_string(),
            prices: PriceTable::new(dec!(12.00), dec!(10.00), dec!(9.00), dec!(350.00)),
        }
    }

    /// A second part, for multi-line claims
    pub fn cylinder_seal_kit() -> SparePart {
        SparePart {
            id: core_kernel::SparePartId::new_v7(),
            stock_code: "HYD-050".to_string(),
            description: "Cylinder seal kit".to_string(),
            prices: PriceTable::new(dec!(25.00), dec!(22.00), dec!(19.00), dec!(800.00)),
        }
    }

    /// A labour entry at EUR 40.00 per hour
    pub fn brake_service() -> Labour {
        Labour {
            id: core_kernel::LabourId::new_v7(),
            code: "LBR-BRK".to_string(),
            description: "Brake service".to_string(),
            rates: PriceTable::new(dec!(45.00), dec!(40.00), dec!(36.00), dec!(1400.00)),
        }
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    pub fn partner_service_id() -> PartnerServiceId {
        PartnerServiceId::new_v7()
    }

    pub fn customer_id() -> CustomerId {
        CustomerId::new_v7()
    }

    pub fn user_id() -> UserId {
        UserId::new_v7()
    }

    pub fn claim_id() -> ClaimId {
        ClaimId::new_v7()
    }
}
