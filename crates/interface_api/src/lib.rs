//! HTTP API Layer
//!
//! This crate provides the REST API for the warranty claim system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Authentication, audit logging, tracing
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{catalog, claims, customers, health, partners};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", post(claims::create_claim))
        .route("/", get(claims::list_claims))
        .route("/:id", get(claims::get_claim))
        .route("/:id/status", put(claims::update_status))
        .route("/:id/parts", post(claims::add_part))
        .route("/:id/labours", post(claims::add_labour));

    // Catalog routes
    let catalog_routes = Router::new()
        .route("/part-info", get(catalog::part_info))
        .route("/labour-info", get(catalog::labour_info))
        .route("/parts", get(catalog::list_parts))
        .route("/parts", post(catalog::create_part))
        .route("/labours", get(catalog::list_labours))
        .route("/labours", post(catalog::create_labour));

    // Customer routes
    let customer_routes = Router::new()
        .route("/", post(customers::create_customer))
        .route("/", get(customers::list_customers))
        .route("/:id", get(customers::get_customer));

    // Partner routes
    let partner_routes = Router::new()
        .route("/", get(partners::list_partners))
        .route("/", post(partners::create_partner))
        .route("/:id", get(partners::get_partner));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .nest("/catalog", catalog_routes)
        .nest("/customers", customer_routes)
        .nest("/partners", partner_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
