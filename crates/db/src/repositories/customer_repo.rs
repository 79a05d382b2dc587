//! Repository for the `customers` table.

use sqlx::PgPool;
use clientele_core::types::DbId;

use crate::models::customer::CustomerRow;

/// Column list for customers queries.
const COLUMNS: &str = "id, name, email, age";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// List all customers, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<CustomerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id ASC");
        sqlx::query_as::<_, CustomerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a customer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CustomerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a customer by email address (exact match).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<CustomerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE email = $1");
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customers WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn exists_by_email(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM customers WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Insert a customer, returning the created row with its assigned ID.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        email: &str,
        age: i32,
    ) -> Result<CustomerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, email, age)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerRow>(&query)
            .bind(name)
            .bind(email)
            .bind(age)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all mutable fields of a customer. Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        email: &str,
        age: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE customers SET name = $2, email = $3, age = $4
             WHERE id = $1",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(age)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a customer by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
