//! Per-currency price tables and price quotation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};

/// Prices for a catalog entry in every supported currency
///
/// Each entry carries one column per currency, so a price always resolves
/// once the currency itself has been parsed. Amounts are unit prices for
/// spare parts and hourly rates for labour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub usd: Decimal,
    pub eur: Decimal,
    pub gbp: Decimal,
    #[serde(rename = "try")]
    pub try_: Decimal,
}

impl PriceTable {
    pub fn new(usd: Decimal, eur: Decimal, gbp: Decimal, try_: Decimal) -> Self {
        Self { usd, eur, gbp, try_ }
    }

    /// Returns the amount for the requested currency
    pub fn get(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::USD => self.usd,
            Currency::EUR => self.eur,
            Currency::GBP => self.gbp,
            Currency::TRY => self.try_,
        }
    }

    /// Returns the amount for the requested currency as Money
    pub fn get_money(&self, currency: Currency) -> Money {
        Money::new(self.get(currency), currency)
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            usd: Decimal::ZERO,
            eur: Decimal::ZERO,
            gbp: Decimal::ZERO,
            try_: Decimal::ZERO,
        }
    }
}

/// A resolved catalog price at a point in time
///
/// This is what the line-item snapshotter and the part/labour info
/// endpoints consume. The quote is a copy of catalog data; mutating the
/// catalog afterwards does not touch quotes already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Stock code or labour code
    pub code: String,
    /// Catalog description at quotation time
    pub description: String,
    /// Requested currency
    pub currency: Currency,
    /// Unit price (spare part) or hourly rate (labour)
    pub unit_amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_table_lookup() {
        let table = PriceTable::new(dec!(12.00), dec!(10.00), dec!(9.00), dec!(350.00));

        assert_eq!(table.get(Currency::USD), dec!(12.00));
        assert_eq!(table.get(Currency::EUR), dec!(10.00));
        assert_eq!(table.get(Currency::GBP), dec!(9.00));
        assert_eq!(table.get(Currency::TRY), dec!(350.00));
    }

    #[test]
    fn test_get_money_carries_currency() {
        let table = PriceTable::new(dec!(12.00), dec!(10.00), dec!(9.00), dec!(350.00));
        let money = table.get_money(Currency::EUR);

        assert_eq!(money.amount(), dec!(10.00));
        assert_eq!(money.currency(), Currency::EUR);
    }

    #[test]
    fn test_default_is_all_zero() {
        let table = PriceTable::default();
        for currency in Currency::all() {
            assert!(table.get(currency).is_zero());
        }
    }
}
