//! Partner Management Domain
//!
//! This crate manages the organizations and people around a warranty
//! claim: partner services (dealers), their customers, and portal users.
//!
//! # Roles
//!
//! Users carry one of four roles. Partner-side roles (`Partner`,
//! `PartnerAdmin`) act for exactly one partner service and only ever see
//! that partner's claims; central roles (`Ssh`, `SshAdmin`) review claims
//! across all partners. [`ClaimScope`] turns a user into the row filter
//! claim queries run under.

pub mod customer;
pub mod error;
pub mod partner;
pub mod user;
pub mod validation;

pub use customer::Customer;
pub use error::PartnerError;
pub use partner::PartnerService;
pub use user::{ClaimScope, User, UserRole};
pub use validation::{PartnerValidator, ValidationResult};
