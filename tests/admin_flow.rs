mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::Value;

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_admin_approval_workflow() {
    println!("\n\n[+] Running test: test_admin_approval_workflow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let manager = test_data::sample_manager();
    let manager_token = client.register_and_login(&app, &manager).await;
    let req = test::TestRequest::post()
        .uri("/api/manager/restaurants")
        .insert_header(("Authorization", format!("Bearer {manager_token}")))
        .set_json(test_data::sample_restaurant())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_approved"], false);
    let restaurant_id = body["restaurant_id"].as_str().unwrap().to_string();
    println!("[+] Restaurant {restaurant_id} created, awaiting approval.");

    let admin = test_data::sample_admin();
    let admin_token = client.register_and_login(&app, &admin).await;

    println!("[>] Listing pending restaurants.");
    let req = test::TestRequest::get()
        .uri("/api/admin/restaurants/pending")
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let pending = body.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["restaurant_id"], restaurant_id.as_str());
    println!("[<] New restaurant shows up as pending.");

    println!("[>] Approving the restaurant.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/restaurants/{restaurant_id}/approve"))
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_approved"], true);
    assert!(!body["approved_at"].is_null());
    println!("[<] Approved with approved_at stamped.");

    println!("[>] Pending list is empty after approval.");
    let req = test::TestRequest::get()
        .uri("/api/admin/restaurants/pending")
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());

    println!("[>] Rejecting the restaurant again.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/restaurants/{restaurant_id}/reject"))
        .insert_header(("Authorization", format!("Bearer {admin_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["is_approved"], false);
    assert!(body["approved_at"].is_null());
    println!("[/] Test passed: approve stamps approved_at, reject clears it.");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_admin_routes_refuse_other_roles() {
    println!("\n\n[+] Running test: test_admin_routes_refuse_other_roles");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let manager = test_data::sample_manager();
    let manager_token = client.register_and_login(&app, &manager).await;

    println!("[>] Manager calls the admin listing.");
    let req = test::TestRequest::get()
        .uri("/api/admin/restaurants")
        .insert_header(("Authorization", format!("Bearer {manager_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let customer = test_data::sample_customer();
    let customer_token = client.register_and_login(&app, &customer).await;

    println!("[>] Customer tries to approve a restaurant.");
    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/admin/restaurants/{}/approve",
            uuid::Uuid::new_v4()
        ))
        .insert_header(("Authorization", format!("Bearer {customer_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    println!("[/] Test passed: admin surface is admin-only.");
}
