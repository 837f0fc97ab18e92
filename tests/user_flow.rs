mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use entity::customer::NotificationPreference;
use serde_json::Value;
use uuid::Uuid;

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_registration_creates_role_extension_rows() {
    println!("\n\n[+] Running test: test_registration_creates_role_extension_rows");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Test client and context created.");

    let customer_data = test_data::sample_customer();
    println!("[>] Registering customer: {}", customer_data["email"]);
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&customer_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let user_id = Uuid::parse_str(body["user_id"].as_str().unwrap()).unwrap();
    println!("[<] Customer registered with id {user_id}.");

    let customer = ctx
        .db
        .get_customer_by_user_id(&user_id)
        .await
        .expect("customer row should exist");
    assert_eq!(
        customer.notification_preference,
        NotificationPreference::Email
    );
    println!("[/] Customer extension row present with EMAIL preference.");

    let manager_data = test_data::sample_manager();
    println!("[>] Registering manager: {}", manager_data["email"]);
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&manager_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let manager_user_id = Uuid::parse_str(body["user_id"].as_str().unwrap()).unwrap();

    let manager = ctx
        .db
        .get_manager_by_user_id(&manager_user_id)
        .await
        .expect("manager row should exist");
    assert!(manager.approved_at.is_none());
    println!("[/] Manager extension row present with approved_at = None.");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_duplicate_email_is_rejected() {
    println!("\n\n[+] Running test: test_duplicate_email_is_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_customer();
    println!("[>] Registering {} twice.", user_data["email"]);
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Second registration returned {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Email already registered");
    println!("[/] Test passed: duplicate email rejected with detail message.");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_login_with_wrong_password_is_unauthorized() {
    println!("\n\n[+] Running test: test_login_with_wrong_password_is_unauthorized");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_customer();
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Logging in with a wrong password.");
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({
            "email": user_data["email"],
            "password": "not-the-password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Login returned {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: wrong password rejected.");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_missing_credential_is_forbidden_and_bad_token_unauthorized() {
    println!("\n\n[+] Running test: test_missing_credential_is_forbidden_and_bad_token_unauthorized");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Calling a manager route without an Authorization header.");
    let req = test::TestRequest::get()
        .uri("/api/manager/restaurants")
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Not authenticated");

    println!("[>] Calling the same route with a garbage token.");
    let req = test::TestRequest::get()
        .uri("/api/manager/restaurants")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: absent credential 403, invalid credential 401.");
}
