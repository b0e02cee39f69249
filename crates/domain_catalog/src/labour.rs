//! Labour catalog entries

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, LabourId};

use crate::error::CatalogError;
use crate::pricing::{PriceQuote, PriceTable};

/// A labour operation in the catalog, with hourly rates per currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labour {
    pub id: LabourId,
    pub code: String,
    pub description: String,
    pub rates: PriceTable,
}

impl Labour {
    /// Creates a new labour entry
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        rates: PriceTable,
    ) -> Result<Self, CatalogError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CatalogError::InvalidCode(
                "labour code must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: LabourId::new_v7(),
            code,
            description: description.into(),
            rates,
        })
    }

    /// Resolves the hourly rate for a currency into a quote
    pub fn quote(&self, currency: Currency) -> PriceQuote {
        PriceQuote {
            code: self.code.clone(),
            description: self.description.clone(),
            currency,
            unit_amount: self.rates.get_money(currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_resolves_requested_currency() {
        let labour = Labour::new(
            "LBR-WELD",
            "Chassis welding",
            PriceTable::new(dec!(45.00), dec!(40.00), dec!(36.00), dec!(1400.00)),
        )
        .unwrap();

        let quote = labour.quote(Currency::GBP);
        assert_eq!(quote.code, "LBR-WELD");
        assert_eq!(quote.unit_amount.amount(), dec!(36.00));
        assert_eq!(quote.currency, Currency::GBP);
    }

    #[test]
    fn test_empty_code_rejected() {
        let result = Labour::new("", "desc", PriceTable::default());
        assert!(matches!(result, Err(CatalogError::InvalidCode(_))));
    }
}
