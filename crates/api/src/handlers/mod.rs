//! Request handlers.
//!
//! Handlers delegate to [`clientele_core::service::CustomerService`] and map
//! errors via [`crate::error::AppError`].

pub mod customers;
