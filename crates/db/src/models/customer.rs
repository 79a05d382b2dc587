//! Row model for the `customers` table.

use clientele_core::customer::Customer;
use clientele_core::types::DbId;
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}
