//! Warranty Claims Domain
//!
//! This crate implements the warranty claim lifecycle: a partner opens a
//! claim for a customer's vehicle, attaches priced spare-part and labour
//! line items, and the claim moves through review.
//!
//! # Claim Lifecycle
//!
//! ```text
//! New -> Needs Revise -> Revised -> Accepted -> Completed
//!     \________________________\-> Rejected
//! ```
//!
//! Line-item prices are snapshots taken from the catalog at submission
//! time; later catalog edits never change an existing line item.

pub mod claim;
pub mod error;
pub mod line_item;
pub mod submission;

pub use claim::{ClaimStatus, ClaimType, VehicleInfo, VehicleType, WarrantyClaim};
pub use error::ClaimError;
pub use line_item::{
    ClaimLabour, ClaimSparePart, MIN_LABOUR_DURATION, MIN_PART_QUANTITY,
};
pub use submission::ClaimSubmission;
