//! In-memory [`CustomerStore`] for tests and local development.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::customer::{Customer, NewCustomer, CUSTOMER_ENTITY};
use crate::error::CoreError;
use crate::store::CustomerStore;
use crate::types::DbId;

#[derive(Debug)]
struct MemoryState {
    /// Kept in insertion order.
    rows: Vec<Customer>,
    next_id: DbId,
}

/// A customer store backed by a `Vec` behind an async lock.
///
/// Each instance owns its records; ids start at 1 and are never reused,
/// even after deletes.
#[derive(Debug)]
pub struct InMemoryCustomerStore {
    state: RwLock<MemoryState>,
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored customers.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

fn email_taken() -> CoreError {
    CoreError::Duplicate("email already taken".to_string())
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn list_all(&self) -> Result<Vec<Customer>, CoreError> {
        Ok(self.state.read().await.rows.clone())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Customer>, CoreError> {
        let state = self.state.read().await;
        Ok(state.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CoreError> {
        let state = self.state.read().await;
        Ok(state.rows.iter().find(|c| c.email == email).cloned())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        let state = self.state.read().await;
        Ok(state.rows.iter().any(|c| c.id == id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, CoreError> {
        let state = self.state.read().await;
        Ok(state.rows.iter().any(|c| c.email == email))
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, CoreError> {
        let mut state = self.state.write().await;
        if state.rows.iter().any(|c| c.email == customer.email) {
            return Err(email_taken());
        }

        let id = state.next_id;
        state.next_id += 1;

        let created = customer.with_id(id);
        state.rows.push(created.clone());
        Ok(created)
    }

    async fn update(&self, customer: &Customer) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        if state
            .rows
            .iter()
            .any(|c| c.id != customer.id && c.email == customer.email)
        {
            return Err(email_taken());
        }

        let row = state
            .rows
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or(CoreError::NotFound {
                entity: CUSTOMER_ENTITY,
                id: customer.id,
            })?;
        *row = customer.clone();
        Ok(())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), CoreError> {
        self.state.write().await.rows.retain(|c| c.id != id);
        Ok(())
    }
}
