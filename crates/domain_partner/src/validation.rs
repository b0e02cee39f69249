//! Partner and customer validation rules
//!
//! # Validation Rules
//!
//! ## Partner services
//! - Must have a name and a plausible email
//! - Phone must not be empty
//!
//! ## Customers
//! - Must have first and last name
//! - Email must look like an email (uniqueness is storage-enforced)
//! - Must belong to a partner service

use crate::customer::Customer;
use crate::partner::PartnerService;

/// Result of entity validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the entity is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for partner-domain entities
pub struct PartnerValidator;

impl PartnerValidator {
    /// Validates a partner service record
    pub fn validate_partner(partner: &PartnerService) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if partner.name.trim().is_empty() {
            result.add_error("Partner service name is required");
        }
        Self::validate_email(&partner.email, &mut result);
        if partner.phone.trim().is_empty() {
            result.add_error("Phone number cannot be empty");
        }

        result
    }

    /// Validates a customer record
    pub fn validate_customer(customer: &Customer) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if customer.first_name.trim().is_empty() {
            result.add_error("Customer first name is required");
        }
        if customer.last_name.trim().is_empty() {
            result.add_error("Customer last name is required");
        }
        Self::validate_email(&customer.email, &mut result);
        if customer.phone.trim().is_empty() {
            result.add_error("Phone number cannot be empty");
        }

        result
    }

    /// Email format validation (basic)
    fn validate_email(email: &str, result: &mut ValidationResult) {
        if !email.contains('@') || !email.contains('.') {
            result.add_error(format!("Invalid email format: {}", email));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CustomerId, PartnerServiceId};

    fn valid_customer() -> Customer {
        Customer {
            id: CustomerId::new_v7(),
            first_name: "Kerem".to_string(),
            last_name: "Polat".to_string(),
            company: "Polat Transport".to_string(),
            email: "kerem@polat-transport.example".to_string(),
            phone: "+90 555 876 5544".to_string(),
            city: "Bursa".to_string(),
            country: "Turkey".to_string(),
            address: "Nilufer, sanayi cd. 8".to_string(),
            partner_service_id: PartnerServiceId::new_v7(),
        }
    }

    #[test]
    fn test_valid_customer() {
        let result = PartnerValidator::validate_customer(&valid_customer());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_customer_missing_first_name() {
        let mut customer = valid_customer();
        customer.first_name = "".to_string();

        let result = PartnerValidator::validate_customer(&customer);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("first name")));
    }

    #[test]
    fn test_customer_bad_email() {
        let mut customer = valid_customer();
        customer.email = "not-an-email".to_string();

        let result = PartnerValidator::validate_customer(&customer);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("email")));
    }

    #[test]
    fn test_partner_requires_name_and_phone() {
        let partner = PartnerService::new("", "ops@partner.example", "", "somewhere");

        let result = PartnerValidator::validate_partner(&partner);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }
}
