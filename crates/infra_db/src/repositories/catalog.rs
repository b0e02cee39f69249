//! Catalog repository implementation
//!
//! Database access for the spare part and labour catalog. Lookups by
//! stock/labour code feed the claim form and the line-item snapshotter.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use core_kernel::{LabourId, SparePartId};
use domain_catalog::{Labour, PriceTable, SparePart};

use crate::error::{map_sqlx_error, DatabaseError};

/// Repository for catalog data
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Looks up a spare part by its stock code
    ///
    /// Returns `None` when no entry carries the code; the caller decides
    /// whether that is an error.
    pub async fn find_part_by_stock_code(
        &self,
        stock_code: &str,
    ) -> Result<Option<SparePart>, DatabaseError> {
        let row = sqlx::query_as::<_, SparePartRow>(
            r#"
            SELECT id, stock_code, description, price_usd, price_eur, price_gbp, price_try
            FROM spare_parts
            WHERE stock_code = $1
            "#,
        )
        .bind(stock_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(SparePart::from))
    }

    /// Looks up a labour entry by its code
    pub async fn find_labour_by_code(
        &self,
        code: &str,
    ) -> Result<Option<Labour>, DatabaseError> {
        let row = sqlx::query_as::<_, LabourRow>(
            r#"
            SELECT id, code, description, rate_usd, rate_eur, rate_gbp, rate_try
            FROM labours
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Labour::from))
    }

    /// Lists the full spare part catalog, ordered by stock code
    pub async fn list_parts(&self) -> Result<Vec<SparePart>, DatabaseError> {
        let rows = sqlx::query_as::<_, SparePartRow>(
            r#"
            SELECT id, stock_code, description, price_usd, price_eur, price_gbp, price_try
            FROM spare_parts
            ORDER BY stock_code
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(SparePart::from).collect())
    }

    /// Lists the full labour catalog, ordered by code
    pub async fn list_labours(&self) -> Result<Vec<Labour>, DatabaseError> {
        let rows = sqlx::query_as::<_, LabourRow>(
            r#"
            SELECT id, code, description, rate_usd, rate_eur, rate_gbp, rate_try
            FROM labours
            ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Labour::from).collect())
    }

    /// Inserts a catalog spare part
    ///
    /// The unique index on stock_code turns a duplicate insert into a
    /// `DuplicateEntry` error.
    pub async fn insert_part(&self, part: &SparePart) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO spare_parts (
                id, stock_code, description, price_usd, price_eur, price_gbp, price_try
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::from(part.id))
        .bind(&part.stock_code)
        .bind(&part.description)
        .bind(part.prices.usd)
        .bind(part.prices.eur)
        .bind(part.prices.gbp)
        .bind(part.prices.try_)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Inserts a catalog labour entry
    pub async fn insert_labour(&self, labour: &Labour) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO labours (
                id, code, description, rate_usd, rate_eur, rate_gbp, rate_try
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::from(labour.id))
        .bind(&labour.code)
        .bind(&labour.description)
        .bind(labour.rates.usd)
        .bind(labour.rates.eur)
        .bind(labour.rates.gbp)
        .bind(labour.rates.try_)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

/// Database row for a spare part
#[derive(Debug, Clone, FromRow)]
pub struct SparePartRow {
    pub id: Uuid,
    pub stock_code: String,
    pub description: String,
    pub price_usd: Decimal,
    pub price_eur: Decimal,
    pub price_gbp: Decimal,
    pub price_try: Decimal,
}

impl From<SparePartRow> for SparePart {
    fn from(row: SparePartRow) -> Self {
        SparePart {
            id: SparePartId::from_uuid(row.id),
            stock_code: row.stock_code,
            description: row.description,
            prices: PriceTable::new(row.price_usd, row.price_eur, row.price_gbp, row.price_try),
        }
    }
}

/// Database row for a labour entry
#[derive(Debug, Clone, FromRow)]
pub struct LabourRow {
    pub id: Uuid,
    pub code: String,
    pub description: String,
    pub rate_usd: Decimal,
    pub rate_eur: Decimal,
    pub rate_gbp: Decimal,
    pub rate_try: Decimal,
}

impl From<LabourRow> for Labour {
    fn from(row: LabourRow) -> Self {
        Labour {
            id: LabourId::from_uuid(row.id),
            code: row.code,
            description: row.description,
            rates: PriceTable::new(row.rate_usd, row.rate_eur, row.rate_gbp, row.rate_try),
        }
    }
}
