//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/library";

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

/// Create a book and return its ID
async fn create_book(client: &Client, title: &str, total_copies: i32) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "author": format!("Author {}", unique_suffix()),
            "genre": "Testing",
            "total_copies": total_copies
        }))
        .send()
        .await
        .expect("Failed to send create book request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID")
}

/// Register a user and return their ID
async fn create_user(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "name": "Test Reader",
            "email": format!("reader{}@example.com", unique_suffix())
        }))
        .send()
        .await
        .expect("Failed to send create user request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No user ID")
}

/// Fetch a book's available_copies
async fn available_copies(client: &Client, book_id: i64) -> i64 {
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body["available_copies"].as_i64().expect("No stock count")
}

/// Rent a book and return the rental ID
async fn rent(client: &Client, book_id: i64, user_id: i64) -> i64 {
    let response = client
        .post(format!("{}/rent", BASE_URL))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send rent request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No rental ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_book_crud_round_trip() {
    let client = Client::new();

    let book_id = create_book(&client, "The Crab Book", 4).await;

    // New book starts with full stock
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_copies"], 4);
    assert_eq!(body["available_copies"], 4);
    assert_eq!(body["is_active"], true);

    // Partial update
    let response = client
        .patch(format!("{}/books/{}", BASE_URL, book_id))
        .json(&json!({ "total_copies": 6 }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["affected"], 1);

    // Soft delete removes the book from the active listing
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["is_active"], false);
}

#[tokio::test]
#[ignore]
async fn test_rent_nonexistent_book_is_404() {
    let client = Client::new();
    let user_id = create_user(&client).await;

    let response = client
        .post(format!("{}/rent", BASE_URL))
        .json(&json!({ "book_id": 999_999_999i64, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_rent_out_of_stock() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let book_id = create_book(&client, "Rare Volume", 0).await;

    let response = client
        .post(format!("{}/rent", BASE_URL))
        .json(&json!({ "book_id": book_id, "user_id": user_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    assert_eq!(available_copies(&client, book_id).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_rental_lifecycle_stock_walk() {
    let client = Client::new();
    let alice = create_user(&client).await;
    let bob = create_user(&client).await;
    let book_id = create_book(&client, "Popular Title", 3).await;

    // Two checkouts by different users
    let rental_a = rent(&client, book_id, alice).await;
    assert_eq!(available_copies(&client, book_id).await, 2);

    let rental_b = rent(&client, book_id, bob).await;
    assert_eq!(available_copies(&client, book_id).await, 1);

    // Explicit return of the first rental
    let response = client
        .post(format!("{}/return", BASE_URL))
        .json(&json!({ "rental_id": rental_a }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    assert_eq!(available_copies(&client, book_id).await, 2);

    // Payment against the still-open second rental auto-returns it
    let response = client
        .post(format!("{}/payments", BASE_URL))
        .json(&json!({ "rental_id": rental_b, "amount": "5.00", "notes": "late fee" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    assert_eq!(available_copies(&client, book_id).await, 3);
}

#[tokio::test]
#[ignore]
async fn test_double_return_increments_stock_once() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let book_id = create_book(&client, "Boomerang Book", 2).await;

    let rental_id = rent(&client, book_id, user_id).await;
    assert_eq!(available_copies(&client, book_id).await, 1);

    let response = client
        .post(format!("{}/return", BASE_URL))
        .json(&json!({ "rental_id": rental_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    // Second return fails and the stock stays put
    let response = client
        .post(format!("{}/return", BASE_URL))
        .json(&json!({ "rental_id": rental_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    assert_eq!(available_copies(&client, book_id).await, 2);
}

#[tokio::test]
#[ignore]
async fn test_payment_on_closed_rental_has_no_side_effect() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let book_id = create_book(&client, "Settled Debts", 1).await;

    let rental_id = rent(&client, book_id, user_id).await;

    let response = client
        .post(format!("{}/return", BASE_URL))
        .json(&json!({ "rental_id": rental_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    assert_eq!(available_copies(&client, book_id).await, 1);

    // A fine can still be paid after the book came back; stock is untouched
    let response = client
        .post(format!("{}/payments", BASE_URL))
        .json(&json!({ "rental_id": rental_id, "amount": "2.50", "notes": "overdue fine" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    assert_eq!(available_copies(&client, book_id).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_payment_rejects_nonpositive_amount() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let book_id = create_book(&client, "Free Lunch", 1).await;
    let rental_id = rent(&client, book_id, user_id).await;

    let response = client
        .post(format!("{}/payments", BASE_URL))
        .json(&json!({ "rental_id": rental_id, "amount": "0.00", "notes": null }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_is_conflict() {
    let client = Client::new();
    let email = format!("dup{}@example.com", unique_suffix());

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": "First", "email": email }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({ "name": "Second", "email": email }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_user_rental_history() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let book_id = create_book(&client, "History Repeats", 1).await;

    let rental_id = rent(&client, book_id, user_id).await;

    let response = client
        .get(format!("{}/users/{}/history", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let history = body.as_array().expect("History is not an array");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["title"], "History Repeats");
    assert_eq!(history[0]["status"], "Available");

    let response = client
        .post(format!("{}/return", BASE_URL))
        .json(&json!({ "rental_id": rental_id }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/users/{}/history", BASE_URL, user_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body[0]["status"], "Returned");
}

#[tokio::test]
#[ignore]
async fn test_dashboard_and_overdue_report() {
    let client = Client::new();

    let response = client
        .get(format!("{}/operations/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());

    let response = client
        .get(format!("{}/operations/overdue", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["summary"].is_string());
    assert!(body["data"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_payment_history_listing() {
    let client = Client::new();
    let user_id = create_user(&client).await;
    let book_id = create_book(&client, "Paid In Full", 1).await;
    let rental_id = rent(&client, book_id, user_id).await;

    let response = client
        .post(format!("{}/payments", BASE_URL))
        .json(&json!({ "rental_id": rental_id, "amount": "1.25", "notes": "fee" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/payments", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let payments = body.as_array().expect("Payments is not an array");
    assert!(payments
        .iter()
        .any(|p| p["book_title"] == "Paid In Full" && p["user_name"] == "Test Reader"));
}
