//! The record store capability consumed by [`crate::service::CustomerService`].

use async_trait::async_trait;

use crate::customer::{Customer, NewCustomer};
use crate::error::CoreError;
use crate::types::DbId;

/// Persistence boundary for customer records.
///
/// Implementations own durable state and must keep `email` unique across all
/// records, rejecting a conflicting write with [`CoreError::Duplicate`].
/// Single-record writes are expected to be atomic.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// All customers, in store-defined order.
    async fn list_all(&self) -> Result<Vec<Customer>, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Customer>, CoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CoreError>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, CoreError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, CoreError>;

    /// Insert a new customer, returning it with its assigned id.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, CoreError>;

    /// Overwrite every field of the record identified by `customer.id`.
    async fn update(&self, customer: &Customer) -> Result<(), CoreError>;

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError>;

    /// Reachability probe used by the health endpoint.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
