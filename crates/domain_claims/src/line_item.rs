//! Claim line items: spare part and labour pricing snapshots
//!
//! Line items copy the catalog code, description and price into the claim
//! at creation time. Catalog edits made afterwards never change a line
//! item that has already been written.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ClaimLabourId, ClaimPartId, Currency, LabourId, Money, SparePartId};
use domain_catalog::{Labour, SparePart};

use crate::error::ClaimError;

/// Minimum quantity for a spare part line
pub const MIN_PART_QUANTITY: u32 = 1;

/// Minimum labour duration in hours (a quarter hour)
pub const MIN_LABOUR_DURATION: Decimal = dec!(0.25);

/// A spare part attached to a claim, with pricing frozen at attach time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimSparePart {
    pub id: ClaimPartId,
    pub claim_id: ClaimId,
    /// Catalog reference kept for integrity; pricing comes from the snapshot
    pub spare_part_id: SparePartId,
    pub stock_code: String,
    pub description: String,
    pub currency: Currency,
    pub unit_price: Money,
    pub quantity: u32,
    /// Set during review; never above the requested quantity
    pub approved_quantity: Option<u32>,
    pub total_price: Money,
}

impl ClaimSparePart {
    /// Snapshots a catalog part into a claim line item
    ///
    /// Validates the quantity, resolves the unit price for the requested
    /// currency and computes total = unit price × quantity.
    pub fn snapshot(
        claim_id: ClaimId,
        part: &SparePart,
        currency: Currency,
        quantity: u32,
    ) -> Result<Self, ClaimError> {
        if quantity < MIN_PART_QUANTITY {
            return Err(ClaimError::QuantityBelowMinimum {
                minimum: MIN_PART_QUANTITY,
                actual: quantity,
            });
        }

        let quote = part.quote(currency);
        let total_price = quote.unit_amount.multiply(Decimal::from(quantity));

        Ok(Self {
            id: ClaimPartId::new_v7(),
            claim_id,
            spare_part_id: part.id,
            stock_code: quote.code,
            description: quote.description,
            currency,
            unit_price: quote.unit_amount,
            quantity,
            approved_quantity: None,
            total_price,
        })
    }

    /// Records the quantity granted during review
    pub fn approve_quantity(&mut self, approved: u32) -> Result<(), ClaimError> {
        if approved > self.quantity {
            return Err(ClaimError::ApprovedQuantityExceedsRequested {
                requested: self.quantity,
                approved,
            });
        }
        self.approved_quantity = Some(approved);
        Ok(())
    }
}

/// A labour operation attached to a claim, with the rate frozen at attach time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimLabour {
    pub id: ClaimLabourId,
    pub claim_id: ClaimId,
    pub labour_id: LabourId,
    pub code: String,
    pub description: String,
    pub currency: Currency,
    pub unit_rate: Money,
    /// Hours, in quarter-hour steps or finer
    pub duration: Decimal,
    pub total_price: Money,
}

impl ClaimLabour {
    /// Snapshots a catalog labour entry into a claim line item
    ///
    /// Validates the duration, resolves the hourly rate for the requested
    /// currency and computes total = rate × duration.
    pub fn snapshot(
        claim_id: ClaimId,
        labour: &Labour,
        currency: Currency,
        duration: Decimal,
    ) -> Result<Self, ClaimError> {
        if duration < MIN_LABOUR_DURATION {
            return Err(ClaimError::DurationBelowMinimum {
                minimum: MIN_LABOUR_DURATION,
                actual: duration,
            });
        }

        let quote = labour.quote(currency);
        let total_price = quote.unit_amount.multiply(duration);

        Ok(Self {
            id: ClaimLabourId::new_v7(),
            claim_id,
            labour_id: labour.id,
            code: quote.code,
            description: quote.description,
            currency,
            unit_rate: quote.unit_amount,
            duration,
            total_price,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use domain_catalog::PriceTable;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn part_total_is_unit_times_quantity(
            unit_cents in 1i64..10_000_00i64,
            quantity in 1u32..500u32
        ) {
            let unit = Decimal::new(unit_cents, 2);
            let part = SparePart::new(
                "PRT-1",
                "part",
                PriceTable::new(unit, unit, unit, unit),
            ).unwrap();

            let line = ClaimSparePart::snapshot(
                ClaimId::new_v7(), &part, Currency::USD, quantity,
            ).unwrap();

            prop_assert_eq!(
                line.total_price.amount(),
                unit * Decimal::from(quantity)
            );
        }

        #[test]
        fn labour_total_is_rate_times_duration(
            rate_cents in 1i64..10_000_00i64,
            quarter_hours in 1u32..200u32
        ) {
            let rate = Decimal::new(rate_cents, 2);
            let duration = Decimal::new(quarter_hours as i64 * 25, 2);
            let labour = Labour::new(
                "LBR-1",
                "labour",
                PriceTable::new(rate, rate, rate, rate),
            ).unwrap();

            let line = ClaimLabour::snapshot(
                ClaimId::new_v7(), &labour, Currency::EUR, duration,
            ).unwrap();

            prop_assert_eq!(line.total_price.amount(), rate * duration);
        }
    }
}
