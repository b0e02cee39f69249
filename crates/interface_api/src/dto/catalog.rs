//! Catalog DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Currency;
use domain_catalog::{Labour, PriceQuote, SparePart};

/// Query parameters for the part-info endpoint
///
/// Both parameters are required; they stay optional here so a missing one
/// maps to a 400 instead of an opaque extractor rejection.
#[derive(Debug, Deserialize)]
pub struct PartInfoParams {
    pub stock_code: Option<String>,
    pub currency: Option<String>,
}

/// Query parameters for the labour-info endpoint
#[derive(Debug, Deserialize)]
pub struct LabourInfoParams {
    pub code: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PartInfoResponse {
    pub stock_code: String,
    pub description: String,
    pub currency: String,
    pub unit_price: Decimal,
}

impl From<PriceQuote> for PartInfoResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            stock_code: quote.code,
            description: quote.description,
            currency: quote.currency.code().to_string(),
            unit_price: quote.unit_amount.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LabourInfoResponse {
    pub code: String,
    pub description: String,
    pub currency: String,
    pub unit_rate: Decimal,
}

impl From<PriceQuote> for LabourInfoResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            code: quote.code,
            description: quote.description,
            currency: quote.currency.code().to_string(),
            unit_rate: quote.unit_amount.amount(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePartRequest {
    #[validate(length(min = 1, message = "stock code is required"))]
    pub stock_code: String,
    pub description: String,
    pub price_usd: Decimal,
    pub price_eur: Decimal,
    pub price_gbp: Decimal,
    pub price_try: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateLabourRequest {
    #[validate(length(min = 1, message = "labour code is required"))]
    pub code: String,
    pub description: String,
    pub rate_usd: Decimal,
    pub rate_eur: Decimal,
    pub rate_gbp: Decimal,
    pub rate_try: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PartResponse {
    pub stock_code: String,
    pub description: String,
    pub price_usd: Decimal,
    pub price_eur: Decimal,
    pub price_gbp: Decimal,
    pub price_try: Decimal,
}

impl From<&SparePart> for PartResponse {
    fn from(part: &SparePart) -> Self {
        Self {
            stock_code: part.stock_code.clone(),
            description: part.description.clone(),
            price_usd: part.prices.get(Currency::USD),
            price_eur: part.prices.get(Currency::EUR),
            price_gbp: part.prices.get(Currency::GBP),
            price_try: part.prices.get(Currency::TRY),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LabourResponse {
    pub code: String,
    pub description: String,
    pub rate_usd: Decimal,
    pub rate_eur: Decimal,
    pub rate_gbp: Decimal,
    pub rate_try: Decimal,
}

impl From<&Labour> for LabourResponse {
    fn from(labour: &Labour) -> Self {
        Self {
            code: labour.code.clone(),
            description: labour.description.clone(),
            rate_usd: labour.rates.get(Currency::USD),
            rate_eur: labour.rates.get(Currency::EUR),
            rate_gbp: labour.rates.get(Currency::GBP),
            rate_try: labour.rates.get(Currency::TRY),
        }
    }
}
