//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the warranty claim
//! system on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access
//! abstractions that hide the database implementation details from the
//! domain layer. Uniqueness rules the domain relies on (stock codes,
//! customer emails, one line item per catalog entry and claim) live here
//! as unique indexes, so they hold under concurrent writers.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, ClaimsRepository, DatabaseConfig};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/warranty")).await?;
//! let repo = ClaimsRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::{CatalogRepository, ClaimDetail, ClaimsRepository, PartnerRepository};
