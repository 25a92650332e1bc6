use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::customers;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;

/// Create a minimal router without state (for probes only)
/// Note: /ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Customer API
        .merge(customers::create_customers_router())
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::customer::{CustomerService, InMemoryCustomerRepository};

    fn state() -> AppState {
        let repository = Arc::new(InMemoryCustomerRepository::new());
        AppState::new(Arc::new(CustomerService::new(repository)))
    }

    async fn status_of(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_full_router_serves_customers_and_probes() {
        let router = create_router_with_state(state());

        assert_eq!(status_of(router.clone(), "/clientes").await, StatusCode::OK);
        assert_eq!(status_of(router.clone(), "/health").await, StatusCode::OK);
        assert_eq!(status_of(router.clone(), "/ready").await, StatusCode::OK);
        assert_eq!(status_of(router, "/live").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_minimal_router() {
        let router = create_router();

        assert_eq!(status_of(router.clone(), "/health").await, StatusCode::OK);
        assert_eq!(status_of(router, "/clientes").await, StatusCode::NOT_FOUND);
    }
}
