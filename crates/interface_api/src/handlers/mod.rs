//! Request handlers, one module per resource

pub mod catalog;
pub mod claims;
pub mod customers;
pub mod health;
pub mod partners;
