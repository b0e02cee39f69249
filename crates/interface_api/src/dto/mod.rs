//! Request/response data transfer objects
//!
//! Requests carry plain strings for enum-like fields and are parsed at
//! the handler boundary; responses flatten domain types into JSON-stable
//! shapes.

pub mod catalog;
pub mod claims;
pub mod customers;
pub mod partners;
