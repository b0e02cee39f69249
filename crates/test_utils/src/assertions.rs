//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_claims::{ClaimLabour, ClaimSparePart};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more
/// than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts the pricing invariant on a spare part line:
/// total_price = unit_price × quantity
pub fn assert_part_line_priced(line: &ClaimSparePart) {
    let expected = line.unit_price.multiply(Decimal::from(line.quantity));
    assert_eq!(
        line.total_price.amount(),
        expected.amount(),
        "Part line {} total {} != unit {} × quantity {}",
        line.stock_code,
        line.total_price.amount(),
        line.unit_price.amount(),
        line.quantity
    );
}

/// Asserts the pricing invariant on a labour line:
/// total_price = unit_rate × duration
pub fn assert_labour_line_priced(line: &ClaimLabour) {
    let expected = line.unit_rate.multiply(line.duration);
    assert_eq!(
        line.total_price.amount(),
        expected.amount(),
        "Labour line {} total {} != rate {} × duration {}",
        line.code,
        line.total_price.amount(),
        line.unit_rate.amount(),
        line.duration
    );
}
