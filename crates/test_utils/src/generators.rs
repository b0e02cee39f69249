//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::TRY),
    ]
}

/// Strategy for generating catalog prices in cents (two decimal places)
pub fn price_cents_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    (price_cents_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::new(amount, currency))
}

/// Strategy for generating valid line-item quantities
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..500u32
}

/// Strategy for generating valid labour durations in quarter-hour steps
pub fn duration_strategy() -> impl Strategy<Value = Decimal> {
    (1u32..200u32).prop_map(|quarters| Decimal::new(quarters as i64 * 25, 2))
}

/// Strategy for generating plausible stock codes
pub fn stock_code_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}-[0-9]{3}"
}
