//! Customer model and request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// Entity name used in [`crate::error::CoreError::NotFound`].
pub const CUSTOMER_ENTITY: &str = "Customer";

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// A customer that has not been inserted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewCustomer {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: DbId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

/// DTO for registering a new customer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerRegistrationRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    pub age: i32,
}

impl From<CustomerRegistrationRequest> for NewCustomer {
    fn from(req: CustomerRegistrationRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            age: req.age,
        }
    }
}

/// DTO for a partial update. Absent (or `null`) fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CustomerUpdateRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,
    pub age: Option<i32>,
}
