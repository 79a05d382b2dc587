//! [`CustomerStore`] backed by PostgreSQL.

use async_trait::async_trait;
use clientele_core::customer::{Customer, NewCustomer, CUSTOMER_ENTITY};
use clientele_core::error::CoreError;
use clientele_core::store::CustomerStore;
use clientele_core::types::DbId;

use crate::repositories::CustomerRepo;
use crate::DbPool;

/// Unique constraint guarding customer emails.
const EMAIL_CONSTRAINT: &str = "uq_customers_email";

/// Persistent customer store over a connection pool.
#[derive(Clone)]
pub struct PgCustomerStore {
    pool: DbPool,
}

impl PgCustomerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Translate a sqlx error into a domain error.
///
/// A unique violation (SQLSTATE 23505) on the email constraint becomes
/// `Duplicate`; this covers a concurrent insert that raced past the
/// service's existence check. Everything else is logged and reported as
/// `Internal` with a sanitized message.
pub fn map_sqlx_error(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some(EMAIL_CONSTRAINT)
        {
            return CoreError::Duplicate("email already taken".to_string());
        }
    }
    tracing::error!(error = %err, "Database error");
    CoreError::Internal("database operation failed".to_string())
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, CoreError> {
        let rows = CustomerRepo::list(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Customer>, CoreError> {
        let row = CustomerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Customer::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CoreError> {
        let row = CustomerRepo::find_by_email(&self.pool, email)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(Customer::from))
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        CustomerRepo::exists_by_id(&self.pool, id)
            .await
            .map_err(map_sqlx_error)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, CoreError> {
        CustomerRepo::exists_by_email(&self.pool, email)
            .await
            .map_err(map_sqlx_error)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, CoreError> {
        let row = CustomerRepo::create(&self.pool, &customer.name, &customer.email, customer.age)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.into())
    }

    async fn update(&self, customer: &Customer) -> Result<(), CoreError> {
        let updated = CustomerRepo::update(
            &self.pool,
            customer.id,
            &customer.name,
            &customer.email,
            customer.age,
        )
        .await
        .map_err(map_sqlx_error)?;

        if !updated {
            return Err(CoreError::NotFound {
                entity: CUSTOMER_ENTITY,
                id: customer.id,
            });
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        CustomerRepo::delete(&self.pool, id)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}
