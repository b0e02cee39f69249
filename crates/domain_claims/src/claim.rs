//! Warranty claim aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, CustomerId, PartnerServiceId, UserId};

use crate::error::ClaimError;

/// Claim status
///
/// Claims move between the submitting partner and the central reviewer:
/// a new or revised claim is reviewed, sent back for revision, accepted
/// or rejected; accepted claims are completed once the work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Submitted, not yet reviewed
    New,
    /// Resubmitted by the partner after revision
    Revised,
    /// Sent back to the partner for revision
    NeedsRevise,
    /// Accepted by the reviewer
    Accepted,
    /// Rejected by the reviewer
    Rejected,
    /// Accepted and work completed
    Completed,
}

impl ClaimStatus {
    /// Stable lowercase token used in the database and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::New => "new",
            ClaimStatus::Revised => "revised",
            ClaimStatus::NeedsRevise => "needs_revise",
            ClaimStatus::Accepted => "accepted",
            ClaimStatus::Rejected => "rejected",
            ClaimStatus::Completed => "completed",
        }
    }

    /// Returns true once the review cycle is over
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Rejected | ClaimStatus::Completed)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ClaimStatus::New),
            "revised" => Ok(ClaimStatus::Revised),
            "needs_revise" => Ok(ClaimStatus::NeedsRevise),
            "accepted" => Ok(ClaimStatus::Accepted),
            "rejected" => Ok(ClaimStatus::Rejected),
            "completed" => Ok(ClaimStatus::Completed),
            other => Err(ClaimError::Validation(format!(
                "unknown claim status '{other}'"
            ))),
        }
    }
}

/// Type of claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    /// Defect repair initiated by the partner
    Repair,
    /// Work mandated by a service bulletin
    Bulletin,
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Repair => "repair",
            ClaimType::Bulletin => "bulletin",
        }
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repair" => Ok(ClaimType::Repair),
            "bulletin" => Ok(ClaimType::Bulletin),
            other => Err(ClaimError::Validation(format!(
                "unknown claim type '{other}'"
            ))),
        }
    }
}

/// Trailer body type of the vehicle the claim is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    CurtainSider,
    Platform,
    ContainerChassis,
    SwapBody,
    Reefer,
    Box,
    Silo,
    Tanker,
    LowBed,
    Tipper,
    Other,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::CurtainSider => "curtain_sider",
            VehicleType::Platform => "platform",
            VehicleType::ContainerChassis => "container_chassis",
            VehicleType::SwapBody => "swap_body",
            VehicleType::Reefer => "reefer",
            VehicleType::Box => "box",
            VehicleType::Silo => "silo",
            VehicleType::Tanker => "tanker",
            VehicleType::LowBed => "low_bed",
            VehicleType::Tipper => "tipper",
            VehicleType::Other => "other",
        }
    }
}

impl FromStr for VehicleType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "curtain_sider" => Ok(VehicleType::CurtainSider),
            "platform" => Ok(VehicleType::Platform),
            "container_chassis" => Ok(VehicleType::ContainerChassis),
            "swap_body" => Ok(VehicleType::SwapBody),
            "reefer" => Ok(VehicleType::Reefer),
            "box" => Ok(VehicleType::Box),
            "silo" => Ok(VehicleType::Silo),
            "tanker" => Ok(VehicleType::Tanker),
            "low_bed" => Ok(VehicleType::LowBed),
            "tipper" => Ok(VehicleType::Tipper),
            "other" => Ok(VehicleType::Other),
            other => Err(ClaimError::Validation(format!(
                "unknown vehicle type '{other}'"
            ))),
        }
    }
}

/// Vehicle and driver details captured on the claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_type: VehicleType,
    pub defect_date: NaiveDate,
    pub chassis_number: i64,
    pub registration_date: NaiveDate,
    pub kilometres: i32,
}

/// A warranty claim created by a partner for a customer and vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantyClaim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-facing claim number
    pub claim_number: String,
    /// Repair or bulletin work
    pub claim_type: ClaimType,
    /// The customer whose vehicle is claimed for
    pub customer_id: CustomerId,
    /// Vehicle and driver details
    pub vehicle: VehicleInfo,
    /// Defect category
    pub defect_category: String,
    /// Defect description
    pub defect_description: String,
    /// Review status
    pub status: ClaimStatus,
    /// The partner service that owns the claim
    pub partner_service_id: PartnerServiceId,
    /// The partner user who filed it
    pub created_by: UserId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl WarrantyClaim {
    /// Opens a new claim in `New` status
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        claim_type: ClaimType,
        customer_id: CustomerId,
        vehicle: VehicleInfo,
        defect_category: impl Into<String>,
        defect_description: impl Into<String>,
        partner_service_id: PartnerServiceId,
        created_by: UserId,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: ClaimId::new_v7(),
            claim_number: generate_claim_number(),
            claim_type,
            customer_id,
            vehicle,
            defect_category: defect_category.into(),
            defect_description: defect_description.into(),
            status: ClaimStatus::New,
            partner_service_id,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the status, validating the transition
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: status.to_string(),
            });
        }
        tracing::debug!(claim = %self.claim_number, from = %self.status, to = %status, "claim status change");
        self.status = status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (New, NeedsRevise)
                | (New, Accepted)
                | (New, Rejected)
                | (NeedsRevise, Revised)
                | (Revised, NeedsRevise)
                | (Revised, Accepted)
                | (Revised, Rejected)
                | (Accepted, Completed)
        )
    }
}

fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("WC-{}", duration.as_millis() % 10_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vehicle() -> VehicleInfo {
        VehicleInfo {
            driver_name: "Mehmet Aksoy".to_string(),
            driver_phone: "+90 555 111 2233".to_string(),
            vehicle_type: VehicleType::CurtainSider,
            defect_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            chassis_number: 90210431,
            registration_date: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            kilometres: 180_500,
        }
    }

    fn open_claim() -> WarrantyClaim {
        WarrantyClaim::open(
            ClaimType::Repair,
            CustomerId::new_v7(),
            test_vehicle(),
            "Brakes",
            "Uneven pad wear on rear axle",
            PartnerServiceId::new_v7(),
            UserId::new_v7(),
        )
    }

    #[test]
    fn test_open_starts_new() {
        let claim = open_claim();
        assert_eq!(claim.status, ClaimStatus::New);
        assert!(claim.claim_number.starts_with("WC-"));
    }

    #[test]
    fn test_review_cycle() {
        let mut claim = open_claim();
        claim.update_status(ClaimStatus::NeedsRevise).unwrap();
        claim.update_status(ClaimStatus::Revised).unwrap();
        claim.update_status(ClaimStatus::Accepted).unwrap();
        claim.update_status(ClaimStatus::Completed).unwrap();
        assert!(claim.status.is_terminal());
    }

    #[test]
    fn test_new_cannot_jump_to_completed() {
        let mut claim = open_claim();
        let result = claim.update_status(ClaimStatus::Completed);
        assert!(matches!(
            result,
            Err(ClaimError::InvalidStatusTransition { .. })
        ));
        assert_eq!(claim.status, ClaimStatus::New);
    }

    #[test]
    fn test_rejected_is_terminal() {
        let mut claim = open_claim();
        claim.update_status(ClaimStatus::Rejected).unwrap();
        assert!(claim.update_status(ClaimStatus::Revised).is_err());
    }

    #[test]
    fn test_needs_revise_only_accepts_revised() {
        let mut claim = open_claim();
        claim.update_status(ClaimStatus::NeedsRevise).unwrap();
        assert!(claim.update_status(ClaimStatus::Accepted).is_err());
        assert!(claim.update_status(ClaimStatus::Revised).is_ok());
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [
            ClaimStatus::New,
            ClaimStatus::Revised,
            ClaimStatus::NeedsRevise,
            ClaimStatus::Accepted,
            ClaimStatus::Rejected,
            ClaimStatus::Completed,
        ] {
            let parsed: ClaimStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
