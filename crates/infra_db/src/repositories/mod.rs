//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain aggregate. Repositories encapsulate
//! SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Runtime-checked SQLx queries with `FromRow` row structs
//! - Transaction support where a write spans multiple tables
//! - Constraint violations mapped to typed errors, never strings matched
//!   at call sites

pub mod catalog;
pub mod claims;
pub mod partner;

pub use catalog::CatalogRepository;
pub use claims::{ClaimDetail, ClaimsRepository};
pub use partner::PartnerRepository;
