//! Claims repository implementation
//!
//! This module provides database access for warranty claims and their
//! line items. Claims are always written together with their line items
//! in one transaction, and every read runs under the caller's
//! [`ClaimScope`] where visibility matters.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

use core_kernel::{
    ClaimId, ClaimLabourId, ClaimPartId, Currency, CustomerId, LabourId, Money,
    PartnerServiceId, SparePartId, UserId,
};
use domain_claims::{
    ClaimLabour, ClaimSparePart, ClaimStatus, ClaimSubmission, ClaimType, VehicleInfo,
    VehicleType, WarrantyClaim,
};
use domain_partner::ClaimScope;

use crate::error::{map_sqlx_error, DatabaseError};

const CLAIM_COLUMNS: &str = r#"
    id, claim_number, claim_type, customer_id,
    driver_name, driver_phone, vehicle_type, defect_date,
    chassis_number, registration_date, kilometres,
    defect_category, defect_description, status,
    partner_service_id, created_by, created_at, updated_at
"#;

/// A claim together with its line items, as read from the database
#[derive(Debug, Clone)]
pub struct ClaimDetail {
    pub claim: WarrantyClaim,
    pub parts: Vec<ClaimSparePart>,
    pub labours: Vec<ClaimLabour>,
}

/// Repository for managing warranty claim data
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a validated submission: the claim and every line item in
    /// one transaction
    ///
    /// The unique indexes on (claim_id, spare_part_id) and
    /// (claim_id, labour_id) reject duplicate line items even when two
    /// submissions race; the violation surfaces as `DuplicateEntry`.
    pub async fn create(&self, submission: &ClaimSubmission) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let claim = &submission.claim;
        sqlx::query(
            r#"
            INSERT INTO warranty_claims (
                id, claim_number, claim_type, customer_id,
                driver_name, driver_phone, vehicle_type, defect_date,
                chassis_number, registration_date, kilometres,
                defect_category, defect_description, status,
                partner_service_id, created_by, created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18
            )
            "#,
        )
        .bind(Uuid::from(claim.id))
        .bind(&claim.claim_number)
        .bind(claim.claim_type.as_str())
        .bind(Uuid::from(claim.customer_id))
        .bind(&claim.vehicle.driver_name)
        .bind(&claim.vehicle.driver_phone)
        .bind(claim.vehicle.vehicle_type.as_str())
        .bind(claim.vehicle.defect_date)
        .bind(claim.vehicle.chassis_number)
        .bind(claim.vehicle.registration_date)
        .bind(claim.vehicle.kilometres)
        .bind(&claim.defect_category)
        .bind(&claim.defect_description)
        .bind(claim.status.as_str())
        .bind(Uuid::from(claim.partner_service_id))
        .bind(Uuid::from(claim.created_by))
        .bind(claim.created_at)
        .bind(claim.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        for part in &submission.parts {
            insert_part_line(&mut tx, part).await?;
        }
        for labour in &submission.labours {
            insert_labour_line(&mut tx, labour).await?;
        }

        record_status_history(&mut tx, claim.id, claim.status, None).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Retrieves a claim by its identifier
    pub async fn get_by_id(&self, claim_id: Uuid) -> Result<WarrantyClaim, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            "SELECT {CLAIM_COLUMNS} FROM warranty_claims WHERE id = $1"
        ))
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        row.try_into()
    }

    /// Retrieves a claim with its line items
    pub async fn get_with_items(&self, claim_id: Uuid) -> Result<ClaimDetail, DatabaseError> {
        let claim = self.get_by_id(claim_id).await?;

        let parts = sqlx::query_as::<_, ClaimPartRow>(
            r#"
            SELECT id, claim_id, spare_part_id, stock_code, description,
                   currency, unit_price, quantity, approved_quantity, total_price
            FROM claim_spare_parts
            WHERE claim_id = $1
            ORDER BY stock_code
            "#,
        )
        .bind(claim_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let labours = sqlx::query_as::<_, ClaimLabourRow>(
            r#"
            SELECT id, claim_id, labour_id, code, description,
                   currency, unit_rate, duration, total_price
            FROM claim_labours
            WHERE claim_id = $1
            ORDER BY code
            "#,
        )
        .bind(claim_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(ClaimDetail {
            claim,
            parts: parts
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            labours: labours
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Lists claims visible under the given scope, newest first
    ///
    /// Partner scopes filter on the owning partner service; the All scope
    /// returns every partner's claims.
    pub async fn list(&self, scope: ClaimScope) -> Result<Vec<WarrantyClaim>, DatabaseError> {
        let rows = match scope {
            ClaimScope::Partner(partner_id) => {
                sqlx::query_as::<_, ClaimRow>(&format!(
                    r#"
                    SELECT {CLAIM_COLUMNS} FROM warranty_claims
                    WHERE partner_service_id = $1
                    ORDER BY created_at DESC
                    "#
                ))
                .bind(Uuid::from(partner_id))
                .fetch_all(&self.pool)
                .await
            }
            ClaimScope::All => {
                sqlx::query_as::<_, ClaimRow>(&format!(
                    "SELECT {CLAIM_COLUMNS} FROM warranty_claims ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Updates a claim's status and records the change in the history table
    pub async fn update_status(
        &self,
        claim_id: Uuid,
        status: ClaimStatus,
        reason: Option<&str>,
    ) -> Result<WarrantyClaim, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let row = sqlx::query_as::<_, ClaimRow>(&format!(
            r#"
            UPDATE warranty_claims
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING {CLAIM_COLUMNS}
            "#
        ))
        .bind(claim_id)
        .bind(status.as_str())
        .bind(now)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        record_status_history(&mut tx, ClaimId::from_uuid(claim_id), status, reason).await?;

        tx.commit().await?;
        row.try_into()
    }

    /// Attaches a spare part line item to an existing claim
    pub async fn add_part(&self, part: &ClaimSparePart) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;
        insert_part_line(&mut tx, part).await?;
        touch_claim(&mut tx, part.claim_id).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Attaches a labour line item to an existing claim
    pub async fn add_labour(&self, labour: &ClaimLabour) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;
        insert_labour_line(&mut tx, labour).await?;
        touch_claim(&mut tx, labour.claim_id).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Records the quantity granted for a part line during review
    pub async fn approve_part_quantity(
        &self,
        claim_id: Uuid,
        claim_part_id: Uuid,
        approved_quantity: u32,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE claim_spare_parts
            SET approved_quantity = $3
            WHERE id = $2 AND claim_id = $1
            "#,
        )
        .bind(claim_id)
        .bind(claim_part_id)
        .bind(approved_quantity as i32)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Claim part", claim_part_id));
        }
        Ok(())
    }
}

async fn insert_part_line(
    tx: &mut Transaction<'_, Postgres>,
    part: &ClaimSparePart,
) -> Result<(), DatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO claim_spare_parts (
            id, claim_id, spare_part_id, stock_code, description,
            currency, unit_price, quantity, approved_quantity, total_price
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(Uuid::from(part.id))
    .bind(Uuid::from(part.claim_id))
    .bind(Uuid::from(part.spare_part_id))
    .bind(&part.stock_code)
    .bind(&part.description)
    .bind(part.currency.code())
    .bind(part.unit_price.amount())
    .bind(part.quantity as i32)
    .bind(part.approved_quantity.map(|q| q as i32))
    .bind(part.total_price.amount())
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

async fn insert_labour_line(
    tx: &mut Transaction<'_, Postgres>,
    labour: &ClaimLabour,
) -> Result<(), DatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO claim_labours (
            id, claim_id, labour_id, code, description,
            currency, unit_rate, duration, total_price
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(Uuid::from(labour.id))
    .bind(Uuid::from(labour.claim_id))
    .bind(Uuid::from(labour.labour_id))
    .bind(&labour.code)
    .bind(&labour.description)
    .bind(labour.currency.code())
    .bind(labour.unit_rate.amount())
    .bind(labour.duration)
    .bind(labour.total_price.amount())
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

async fn record_status_history(
    tx: &mut Transaction<'_, Postgres>,
    claim_id: ClaimId,
    status: ClaimStatus,
    reason: Option<&str>,
) -> Result<(), DatabaseError> {
    sqlx::query(
        r#"
        INSERT INTO claim_status_history (id, claim_id, status, reason, changed_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(Uuid::from(claim_id))
    .bind(status.as_str())
    .bind(reason)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

async fn touch_claim(
    tx: &mut Transaction<'_, Postgres>,
    claim_id: ClaimId,
) -> Result<(), DatabaseError> {
    let result = sqlx::query("UPDATE warranty_claims SET updated_at = $2 WHERE id = $1")
        .bind(Uuid::from(claim_id))
        .bind(Utc::now())
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx_error)?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::not_found("Claim", claim_id));
    }
    Ok(())
}

/// Database row for a warranty claim
#[derive(Debug, Clone, FromRow)]
pub struct ClaimRow {
    pub id: Uuid,
    pub claim_number: String,
    pub claim_type: String,
    pub customer_id: Uuid,
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_type: String,
    pub defect_date: NaiveDate,
    pub chassis_number: i64,
    pub registration_date: NaiveDate,
    pub kilometres: i32,
    pub defect_category: String,
    pub defect_description: String,
    pub status: String,
    pub partner_service_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ClaimRow> for WarrantyClaim {
    type Error = DatabaseError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        Ok(WarrantyClaim {
            id: ClaimId::from_uuid(row.id),
            claim_number: row.claim_number,
            claim_type: parse_token::<ClaimType>(&row.claim_type)?,
            customer_id: CustomerId::from_uuid(row.customer_id),
            vehicle: VehicleInfo {
                driver_name: row.driver_name,
                driver_phone: row.driver_phone,
                vehicle_type: parse_token::<VehicleType>(&row.vehicle_type)?,
                defect_date: row.defect_date,
                chassis_number: row.chassis_number,
                registration_date: row.registration_date,
                kilometres: row.kilometres,
            },
            defect_category: row.defect_category,
            defect_description: row.defect_description,
            status: parse_token::<ClaimStatus>(&row.status)?,
            partner_service_id: PartnerServiceId::from_uuid(row.partner_service_id),
            created_by: UserId::from_uuid(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Database row for a claim spare part line
#[derive(Debug, Clone, FromRow)]
pub struct ClaimPartRow {
    pub id: Uuid,
    pub claim_id: Uuid,
    pub spare_part_id: Uuid,
    pub stock_code: String,
    pub description: String,
    pub currency: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub approved_quantity: Option<i32>,
    pub total_price: Decimal,
}

impl TryFrom<ClaimPartRow> for ClaimSparePart {
    type Error = DatabaseError;

    fn try_from(row: ClaimPartRow) -> Result<Self, Self::Error> {
        let currency = parse_currency(&row.currency)?;
        Ok(ClaimSparePart {
            id: ClaimPartId::from_uuid(row.id),
            claim_id: ClaimId::from_uuid(row.claim_id),
            spare_part_id: SparePartId::from_uuid(row.spare_part_id),
            stock_code: row.stock_code,
            description: row.description,
            currency,
            unit_price: Money::new(row.unit_price, currency),
            quantity: non_negative(row.quantity, "quantity")?,
            approved_quantity: row
                .approved_quantity
                .map(|q| non_negative(q, "approved_quantity"))
                .transpose()?,
            total_price: Money::new(row.total_price, currency),
        })
    }
}

/// Database row for a claim labour line
#[derive(Debug, Clone, FromRow)]
pub struct ClaimLabourRow {
    pub id: Uuid,
    pub claim_id: Uuid,
    pub labour_id: Uuid,
    pub code: String,
    pub description: String,
    pub currency: String,
    pub unit_rate: Decimal,
    pub duration: Decimal,
    pub total_price: Decimal,
}

impl TryFrom<ClaimLabourRow> for ClaimLabour {
    type Error = DatabaseError;

    fn try_from(row: ClaimLabourRow) -> Result<Self, Self::Error> {
        let currency = parse_currency(&row.currency)?;
        Ok(ClaimLabour {
            id: ClaimLabourId::from_uuid(row.id),
            claim_id: ClaimId::from_uuid(row.claim_id),
            labour_id: LabourId::from_uuid(row.labour_id),
            code: row.code,
            description: row.description,
            currency,
            unit_rate: Money::new(row.unit_rate, currency),
            duration: row.duration,
            total_price: Money::new(row.total_price, currency),
        })
    }
}

fn parse_token<T: std::str::FromStr>(token: &str) -> Result<T, DatabaseError>
where
    T::Err: std::fmt::Display,
{
    token
        .parse::<T>()
        .map_err(|e| DatabaseError::SerializationError(e.to_string()))
}

fn parse_currency(code: &str) -> Result<Currency, DatabaseError> {
    code.parse::<Currency>()
        .map_err(|e| DatabaseError::SerializationError(e.to_string()))
}

fn non_negative(value: i32, field: &str) -> Result<u32, DatabaseError> {
    u32::try_from(value).map_err(|_| {
        DatabaseError::SerializationError(format!("negative {} stored for claim line", field))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn part_row() -> ClaimPartRow {
        ClaimPartRow {
            id: Uuid::new_v4(),
            claim_id: Uuid::new_v4(),
            spare_part_id: Uuid::new_v4(),
            stock_code: "ABC-123".to_string(),
            description: "Brake disc".to_string(),
            currency: "EUR".to_string(),
            unit_price: dec!(10.00),
            quantity: 3,
            approved_quantity: None,
            total_price: dec!(30.00),
        }
    }

    #[test]
    fn test_part_row_maps_to_domain() {
        let line: ClaimSparePart = part_row().try_into().unwrap();

        assert_eq!(line.currency, Currency::EUR);
        assert_eq!(line.unit_price.amount(), dec!(10.00));
        assert_eq!(line.total_price.amount(), dec!(30.00));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_part_row_rejects_unknown_currency() {
        let mut row = part_row();
        row.currency = "JPY".to_string();

        let result: Result<ClaimSparePart, _> = row.try_into();
        assert!(matches!(
            result,
            Err(DatabaseError::SerializationError(_))
        ));
    }

    #[test]
    fn test_part_row_rejects_negative_quantity() {
        let mut row = part_row();
        row.quantity = -1;

        let result: Result<ClaimSparePart, _> = row.try_into();
        assert!(matches!(
            result,
            Err(DatabaseError::SerializationError(_))
        ));
    }

    #[test]
    fn test_claim_row_rejects_unknown_status() {
        let row = ClaimRow {
            id: Uuid::new_v4(),
            claim_number: "WC-1".to_string(),
            claim_type: "repair".to_string(),
            customer_id: Uuid::new_v4(),
            driver_name: "d".to_string(),
            driver_phone: "p".to_string(),
            vehicle_type: "tipper".to_string(),
            defect_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            chassis_number: 1,
            registration_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            kilometres: 1000,
            defect_category: "c".to_string(),
            defect_description: "d".to_string(),
            status: "archived".to_string(),
            partner_service_id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let result: Result<WarrantyClaim, _> = row.try_into();
        assert!(matches!(
            result,
            Err(DatabaseError::SerializationError(_))
        ));
    }
}
