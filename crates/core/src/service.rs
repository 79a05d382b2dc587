//! Customer lifecycle rules: registration, lookup, deletion and partial update.
//!
//! The service depends only on the [`CustomerStore`] capability. Every
//! operation either completes fully or fails before writing anything.

use std::sync::Arc;

use validator::Validate;

use crate::customer::{
    Customer, CustomerRegistrationRequest, CustomerUpdateRequest, NewCustomer, CUSTOMER_ENTITY,
};
use crate::error::CoreError;
use crate::store::CustomerStore;
use crate::types::DbId;

const EMAIL_TAKEN: &str = "email already taken";
const NO_DATA_CHANGES: &str = "no data changes found";

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: CUSTOMER_ENTITY,
        id,
    }
}

/// Validation and mutation rules for customer records.
///
/// Cheaply cloneable; clones share the same store.
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn CustomerStore> {
        &self.store
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, CoreError> {
        self.store.list_all().await
    }

    pub async fn get_customer(&self, id: DbId) -> Result<Customer, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Register a new customer. Fails with `Duplicate` if the email is taken.
    pub async fn register_customer(
        &self,
        request: CustomerRegistrationRequest,
    ) -> Result<Customer, CoreError> {
        request.validate()?;

        if self.store.exists_by_email(&request.email).await? {
            return Err(CoreError::Duplicate(EMAIL_TAKEN.to_string()));
        }

        self.store.insert(NewCustomer::from(request)).await
    }

    pub async fn delete_customer(&self, id: DbId) -> Result<(), CoreError> {
        if !self.store.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        self.store.delete_by_id(id).await
    }

    /// Apply a partial update.
    ///
    /// Only fields that are present and differ from the stored value count as
    /// changes. An update with no effective change fails with `NoChange`. A
    /// new email already held by another customer fails with `Duplicate`.
    /// On success the whole record is written back.
    pub async fn update_customer(
        &self,
        id: DbId,
        request: CustomerUpdateRequest,
    ) -> Result<Customer, CoreError> {
        let mut customer = self.get_customer(id).await?;
        request.validate()?;

        let mut changed = false;

        if let Some(name) = request.name.filter(|n| *n != customer.name) {
            customer.name = name;
            changed = true;
        }

        if let Some(email) = request.email.filter(|e| *e != customer.email) {
            if self.store.find_by_email(&email).await?.is_some() {
                return Err(CoreError::Duplicate(EMAIL_TAKEN.to_string()));
            }
            customer.email = email;
            changed = true;
        }

        if let Some(age) = request.age.filter(|a| *a != customer.age) {
            customer.age = age;
            changed = true;
        }

        if !changed {
            return Err(CoreError::NoChange(NO_DATA_CHANGES.to_string()));
        }

        self.store.update(&customer).await?;
        Ok(customer)
    }
}
