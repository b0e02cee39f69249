//! Spare part catalog entries

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, SparePartId};

use crate::error::CatalogError;
use crate::pricing::{PriceQuote, PriceTable};

/// A spare part in the catalog, priced per currency
///
/// The stock code is the user-facing key; claim forms reference parts by
/// stock code, not by id. Uniqueness of the stock code is enforced by the
/// storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparePart {
    pub id: SparePartId,
    pub stock_code: String,
    pub description: String,
    pub prices: PriceTable,
}

impl SparePart {
    /// Creates a new catalog entry
    pub fn new(
        stock_code: impl Into<String>,
        description: impl Into<String>,
        prices: PriceTable,
    ) -> Result<Self, CatalogError> {
        let stock_code = stock_code.into();
        if stock_code.trim().is_empty() {
            return Err(CatalogError::InvalidCode(
                "stock code must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: SparePartId::new_v7(),
            stock_code,
            description: description.into(),
            prices,
        })
    }

    /// Resolves the unit price for a currency into a quote
    pub fn quote(&self, currency: Currency) -> PriceQuote {
        PriceQuote {
            code: self.stock_code.clone(),
            description: self.description.clone(),
            currency,
            unit_amount: self.prices.get_money(currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn brake_disc() -> SparePart {
        SparePart::new(
            "ABC-123",
            "Brake disc, ventilated",
            PriceTable::new(dec!(12.00), dec!(10.00), dec!(9.00), dec!(350.00)),
        )
        .unwrap()
    }

    #[test]
    fn test_quote_resolves_requested_currency() {
        let part = brake_disc();
        let quote = part.quote(Currency::EUR);

        assert_eq!(quote.code, "ABC-123");
        assert_eq!(quote.currency, Currency::EUR);
        assert_eq!(quote.unit_amount.amount(), dec!(10.00));
    }

    #[test]
    fn test_quote_is_a_copy() {
        let mut part = brake_disc();
        let quote = part.quote(Currency::EUR);

        // Later catalog edits must not be visible through the quote
        part.prices.eur = dec!(99.99);
        part.description = "superseded".to_string();

        assert_eq!(quote.unit_amount.amount(), dec!(10.00));
        assert_eq!(quote.description, "Brake disc, ventilated");
    }

    #[test]
    fn test_empty_stock_code_rejected() {
        let result = SparePart::new("  ", "whatever", PriceTable::default());
        assert!(matches!(result, Err(CatalogError::InvalidCode(_))));
    }
}
