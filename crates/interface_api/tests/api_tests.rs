//! HTTP-level tests for the API layer
//!
//! These tests drive the real router through axum-test. The pool is
//! created lazily and never connected: every asserted path (auth
//! rejection, parameter validation, empty-claim rejection) resolves
//! before any query would run.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;

use core_kernel::PartnerServiceId;
use domain_partner::{User, UserRole};
use interface_api::{auth::create_token, config::ApiConfig, create_router};

const TEST_SECRET: &str = "test-secret";

fn test_server() -> TestServer {
    let config = ApiConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..ApiConfig::default()
    };
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/warranty_test")
        .expect("lazy pool");

    TestServer::new(create_router(pool, config)).expect("test server")
}

fn partner_token() -> String {
    let user = User::new(
        "partner.user",
        UserRole::Partner,
        Some(PartnerServiceId::new_v7()),
    );
    create_token(&user, TEST_SECRET, 3600).unwrap()
}

fn ssh_token() -> String {
    let user = User::new("reviewer", UserRole::Ssh, None);
    create_token(&user, TEST_SECRET, 3600).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let server = test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let server = test_server();

    let response = server.get("/api/v1/claims").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let server = test_server();

    let response = server
        .get("/api/v1/claims")
        .authorization_bearer("not-a-jwt")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_part_info_missing_stock_code_is_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/v1/catalog/part-info?currency=EUR")
        .authorization_bearer(&partner_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_part_info_missing_currency_is_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/v1/catalog/part-info?stock_code=ABC-123")
        .authorization_bearer(&partner_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_part_info_unknown_currency_is_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/v1/catalog/part-info?stock_code=ABC-123&currency=JPY")
        .authorization_bearer(&partner_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_labour_info_missing_code_is_bad_request() {
    let server = test_server();

    let response = server
        .get("/api/v1/catalog/labour-info?currency=EUR")
        .authorization_bearer(&partner_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

fn claim_body(parts: serde_json::Value, labours: serde_json::Value) -> serde_json::Value {
    json!({
        "claim_type": "repair",
        "customer_id": uuid::Uuid::new_v4(),
        "driver_name": "Mehmet Aksoy",
        "driver_phone": "+90 555 111 2233",
        "vehicle_type": "curtain_sider",
        "defect_date": "2024-03-10",
        "chassis_number": 90210431,
        "registration_date": "2022-06-01",
        "kilometres": 180500,
        "defect_category": "Brakes",
        "defect_description": "Uneven pad wear on rear axle",
        "parts": parts,
        "labours": labours,
    })
}

#[tokio::test]
async fn test_claim_without_line_items_is_rejected() {
    let server = test_server();

    let response = server
        .post("/api/v1/claims")
        .authorization_bearer(&partner_token())
        .json(&claim_body(json!([]), json!([])))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_central_roles_cannot_file_claims() {
    let server = test_server();

    let response = server
        .post("/api/v1/claims")
        .authorization_bearer(&ssh_token())
        .json(&claim_body(json!([]), json!([])))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_claim_with_blank_driver_name_is_rejected() {
    let server = test_server();

    let mut body = claim_body(json!([]), json!([]));
    body["driver_name"] = json!("");

    let response = server
        .post("/api/v1/claims")
        .authorization_bearer(&partner_token())
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_status_update_with_unknown_status_is_rejected() {
    let server = test_server();

    let response = server
        .put(&format!("/api/v1/claims/{}/status", uuid::Uuid::new_v4()))
        .authorization_bearer(&ssh_token())
        .json(&json!({ "status": "archived" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_partner_roles_cannot_register_partners() {
    let server = test_server();

    let response = server
        .post("/api/v1/partners")
        .authorization_bearer(&partner_token())
        .json(&json!({
            "name": "Rogue Partner",
            "email": "rogue@partner.example",
            "phone": "+90 000",
            "address": "nowhere",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_ssh_cannot_manage_catalog() {
    let server = test_server();

    let response = server
        .post("/api/v1/catalog/parts")
        .authorization_bearer(&ssh_token())
        .json(&json!({
            "stock_code": "ABC-123",
            "description": "Brake disc",
            "price_usd": "12.00",
            "price_eur": "10.00",
            "price_gbp": "9.00",
            "price_try": "350.00",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_central_customer_listing_requires_partner_parameter() {
    let server = test_server();

    let response = server
        .get("/api/v1/customers")
        .authorization_bearer(&ssh_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
