//! API integration tests
//!
//! These tests require a running server with seeded data.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated admin token
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@bookify.test",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@bookify.test",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@bookify.test",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admin/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_shape() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/admin/dashboard", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["admin_name"].is_string());
    assert!(body["total_bookings"].is_number());
    assert!(body["confirmed_bookings"].is_number());
    assert!(body["available_rooms"].is_number());
    assert!(body["recent_bookings"].is_array());
    assert!(body["all_bookings"].is_array());
    assert!(body["rooms"].is_array());
    assert!(body["recent_bookings"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
#[ignore]
async fn test_get_admins() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/admin/admins", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["admins"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_update_booking_status_rejects_unknown_status() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/admin/bookings/status", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "bookingId": 7,
            "status": "Shipped"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid status");
}

#[tokio::test]
#[ignore]
async fn test_update_booking_status_rejects_bad_id() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/admin/bookings/status", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "BookingId": 0,
            "Status": "Confirmed"
        }))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request");
}

#[tokio::test]
#[ignore]
async fn test_delete_pending_booking_is_rejected() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    // Booking 7 is seeded with status Pending
    let response = client
        .post(format!("{}/admin/bookings/delete", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "bookingId": 7 }))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Only cancelled bookings can be deleted");
}

#[tokio::test]
#[ignore]
async fn test_create_admin_with_invalid_form() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/admin/admins", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "full_name": "X",
            "email": "not-an-email",
            "password": "123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_list_rooms() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/admin/rooms", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}
