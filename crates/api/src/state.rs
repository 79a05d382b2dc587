use clientele_core::service::CustomerService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service shares its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Customer lifecycle rules over the configured store.
    pub customers: CustomerService,
}
