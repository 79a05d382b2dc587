//! Route definitions for customers.
//!
//! Mounted at `/customers` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Customer routes.
///
/// ```text
/// GET    /                   -> list_customers
/// POST   /                   -> register_customer
/// GET    /{id}               -> get_customer
/// PUT    /{id}               -> update_customer
/// DELETE /{id}               -> delete_customer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(customers::list_customers).post(customers::register_customer),
        )
        .route(
            "/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
}
