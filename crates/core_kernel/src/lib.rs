//! Core Kernel - Foundational types and utilities for the warranty system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Common identifiers and value objects

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{
    ClaimId, ClaimLabourId, ClaimPartId, CustomerId, LabourId, PartnerServiceId, SparePartId,
    UserId,
};
pub use money::{Currency, Money, MoneyError};
