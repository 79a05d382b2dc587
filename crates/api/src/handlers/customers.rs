//! Handlers for the customer endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use clientele_core::customer::{CustomerRegistrationRequest, CustomerUpdateRequest};
use clientele_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /customers
pub async fn list_customers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let customers = state.customers.list_customers().await?;
    Ok(Json(DataResponse { data: customers }))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let customer = state.customers.get_customer(id).await?;
    Ok(Json(DataResponse { data: customer }))
}

/// POST /customers
///
/// Register a new customer. Returns 409 if the email is already taken.
pub async fn register_customer(
    State(state): State<AppState>,
    payload: Result<Json<CustomerRegistrationRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let customer = state.customers.register_customer(input).await?;

    tracing::info!(customer_id = customer.id, "Customer registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: customer })))
}

/// PUT /customers/{id}
///
/// Partial update; omitted or `null` fields are left unchanged.
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<CustomerUpdateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let customer = state.customers.update_customer(id, input).await?;

    tracing::info!(customer_id = id, "Customer updated");

    Ok(Json(DataResponse { data: customer }))
}

/// DELETE /customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.customers.delete_customer(id).await?;

    tracing::info!(customer_id = id, "Customer deleted");

    Ok(StatusCode::NO_CONTENT)
}
