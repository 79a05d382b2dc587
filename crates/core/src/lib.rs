//! Customer domain logic shared by the database and API crates.
//!
//! Holds the customer model, the [`store::CustomerStore`] capability that
//! every persistence backend implements, and the [`service::CustomerService`]
//! that owns the registration and partial-update rules.

pub mod customer;
pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod types;
