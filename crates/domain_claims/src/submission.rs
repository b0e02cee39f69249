//! Claim submission validation

use std::collections::HashSet;

use crate::claim::WarrantyClaim;
use crate::error::ClaimError;
use crate::line_item::{ClaimLabour, ClaimSparePart};

/// A claim together with its line items, as submitted by a partner
///
/// Carries everything the storage layer writes in one transaction.
#[derive(Debug, Clone)]
pub struct ClaimSubmission {
    pub claim: WarrantyClaim,
    pub parts: Vec<ClaimSparePart>,
    pub labours: Vec<ClaimLabour>,
}

impl ClaimSubmission {
    pub fn new(
        claim: WarrantyClaim,
        parts: Vec<ClaimSparePart>,
        labours: Vec<ClaimLabour>,
    ) -> Self {
        Self {
            claim,
            parts,
            labours,
        }
    }

    /// Validates the submission as a whole
    ///
    /// A claim must carry at least one spare part or labour item, every
    /// line item must belong to the claim, and the same catalog entry may
    /// appear only once. The storage layer enforces the same uniqueness
    /// with constraints; this check gives the caller a domain error before
    /// the insert is attempted.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.parts.is_empty() && self.labours.is_empty() {
            return Err(ClaimError::EmptyClaim);
        }

        for part in &self.parts {
            if part.claim_id != self.claim.id {
                return Err(ClaimError::Validation(format!(
                    "spare part line {} does not belong to claim {}",
                    part.stock_code, self.claim.id
                )));
            }
        }
        for labour in &self.labours {
            if labour.claim_id != self.claim.id {
                return Err(ClaimError::Validation(format!(
                    "labour line {} does not belong to claim {}",
                    labour.code, self.claim.id
                )));
            }
        }

        let mut seen_parts = HashSet::new();
        for part in &self.parts {
            if !seen_parts.insert(part.spare_part_id) {
                return Err(ClaimError::DuplicateLineItem(part.stock_code.clone()));
            }
        }

        let mut seen_labours = HashSet::new();
        for labour in &self.labours {
            if !seen_labours.insert(labour.labour_id) {
                return Err(ClaimError::DuplicateLineItem(labour.code.clone()));
            }
        }

        Ok(())
    }
}
