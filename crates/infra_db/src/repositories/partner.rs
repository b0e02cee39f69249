//! Partner repository implementation
//!
//! Database access for partner services, their customers, and portal
//! users. Customers are always listed per partner; the customer email
//! carries a unique index.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use core_kernel::{CustomerId, PartnerServiceId, UserId};
use domain_partner::{Customer, PartnerService, User, UserRole};

use crate::error::{map_sqlx_error, DatabaseError};

/// Repository for partner-domain data
#[derive(Debug, Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    /// Creates a new PartnerRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a partner service
    pub async fn create_partner(&self, partner: &PartnerService) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO partner_services (id, name, email, phone, address)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::from(partner.id))
        .bind(&partner.name)
        .bind(&partner.email)
        .bind(&partner.phone)
        .bind(&partner.address)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Retrieves a partner service by its identifier
    pub async fn get_partner(&self, id: Uuid) -> Result<PartnerService, DatabaseError> {
        let row = sqlx::query_as::<_, PartnerServiceRow>(
            "SELECT id, name, email, phone, address FROM partner_services WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| DatabaseError::not_found("Partner service", id))?;

        Ok(row.into())
    }

    /// Lists all partner services, ordered by name
    pub async fn list_partners(&self) -> Result<Vec<PartnerService>, DatabaseError> {
        let rows = sqlx::query_as::<_, PartnerServiceRow>(
            "SELECT id, name, email, phone, address FROM partner_services ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Inserts a customer
    ///
    /// The unique index on the email column turns a duplicate insert into
    /// a `DuplicateEntry` error.
    pub async fn create_customer(&self, customer: &Customer) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id, first_name, last_name, company, email, phone,
                city, country, address, partner_service_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(Uuid::from(customer.id))
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.company)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.city)
        .bind(&customer.country)
        .bind(&customer.address)
        .bind(Uuid::from(customer.partner_service_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    /// Retrieves a customer by its identifier
    pub async fn get_customer(&self, id: Uuid) -> Result<Customer, DatabaseError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, company, email, phone,
                   city, country, address, partner_service_id
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| DatabaseError::not_found("Customer", id))?;

        Ok(row.into())
    }

    /// Lists the customers belonging to one partner service
    pub async fn list_customers_by_partner(
        &self,
        partner_id: Uuid,
    ) -> Result<Vec<Customer>, DatabaseError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, company, email, phone,
                   city, country, address, partner_service_id
            FROM customers
            WHERE partner_service_id = $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(partner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Retrieves a portal user by its identifier
    pub async fn get_user(&self, id: Uuid) -> Result<User, DatabaseError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, role, partner_service_id FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or_else(|| DatabaseError::not_found("User", id))?;

        row.try_into()
    }
}

/// Database row for a partner service
#[derive(Debug, Clone, FromRow)]
pub struct PartnerServiceRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<PartnerServiceRow> for PartnerService {
    fn from(row: PartnerServiceRow) -> Self {
        PartnerService {
            id: PartnerServiceId::from_uuid(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            address: row.address,
        }
    }
}

/// Database row for a customer
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub address: String,
    pub partner_service_id: Uuid,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: CustomerId::from_uuid(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            company: row.company,
            email: row.email,
            phone: row.phone,
            city: row.city,
            country: row.country,
            address: row.address,
            partner_service_id: PartnerServiceId::from_uuid(row.partner_service_id),
        }
    }
}

/// Database row for a portal user
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    pub partner_service_id: Option<Uuid>,
}

impl TryFrom<UserRow> for User {
    type Error = DatabaseError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = row
            .role
            .parse::<UserRole>()
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(User {
            id: UserId::from_uuid(row.id),
            username: row.username,
            role,
            partner_service_id: row.partner_service_id.map(PartnerServiceId::from_uuid),
        })
    }
}
