//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic operations, currency parsing,
//! and the rounding behavior line-item pricing depends on.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::EUR);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::TRY);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::TRY);
    }

    #[test]
    fn test_all_currencies_have_two_decimal_places() {
        for currency in Currency::all() {
            assert_eq!(currency.decimal_places(), 2);
        }
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::USD);
        let result = a.checked_add(&b).unwrap();
        assert_eq!(result.amount(), dec!(150.00));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::EUR);
        let result = a.checked_add(&b);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::new(dec!(30.00), Currency::GBP);
        let b = Money::new(dec!(100.00), Currency::GBP);
        let result = a.checked_sub(&b).unwrap();
        assert_eq!(result.amount(), dec!(-70.00));
    }

    #[test]
    fn test_multiply_by_quantity() {
        let m = Money::new(dec!(10.00), Currency::EUR);
        let result = m.multiply(dec!(3));
        assert_eq!(result.amount(), dec!(30.00));
    }

    #[test]
    fn test_multiply_by_fractional_duration() {
        let m = Money::new(dec!(80.00), Currency::EUR);
        let result = m.multiply(dec!(0.25));
        assert_eq!(result.amount(), dec!(20.00));
    }

    #[test]
    fn test_multiply_by_zero() {
        let m = Money::new(dec!(100.00), Currency::USD);
        let result = m.multiply(dec!(0));
        assert!(result.is_zero());
    }

    #[test]
    fn test_multiply_operator() {
        let m = Money::new(dec!(100.00), Currency::USD);
        let result = m * dec!(2);
        assert_eq!(result.amount(), dec!(200.00));
    }
}

mod currency {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_all_supported_codes() {
        for currency in Currency::all() {
            let parsed = Currency::from_str(currency.code()).unwrap();
            assert_eq!(parsed, currency);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Currency::from_str("try").unwrap(), Currency::TRY);
        assert_eq!(Currency::from_str("Gbp").unwrap(), Currency::GBP);
    }

    #[test]
    fn test_parse_unknown_code_fails() {
        let result = Currency::from_str("CHF");
        assert!(matches!(result, Err(MoneyError::UnknownCurrency(_))));
    }

    #[test]
    fn test_display_uses_iso_code() {
        assert_eq!(Currency::TRY.to_string(), "TRY");
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_precision() {
        let m = Money::new(dec!(12.3456), Currency::EUR);
        assert_eq!(m.round_to_currency().amount(), dec!(12.35));
    }

    #[test]
    fn test_display_includes_symbol() {
        let m = Money::new(dec!(10.00), Currency::EUR);
        assert_eq!(m.to_string(), "€ 10.00");
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_money_serde_round_trip() {
        let m = Money::new(dec!(42.50), Currency::GBP);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_currency_serializes_uppercase() {
        let json = serde_json::to_string(&Currency::TRY).unwrap();
        assert_eq!(json, "\"TRY\"");
    }
}
