mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::{json, Value};

async fn create_restaurant<S>(app: &S, token: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri("/api/manager/restaurants")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(test_data::sample_restaurant())
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    body["restaurant_id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_overlapping_hours_are_rejected() {
    println!("\n\n[+] Running test: test_overlapping_hours_are_rejected");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let manager = test_data::sample_manager();
    let token = client.register_and_login(&app, &manager).await;
    let restaurant_id = create_restaurant(&app, &token).await;
    println!("[+] Manager registered, restaurant {restaurant_id} created.");

    println!("[>] Creating Monday 09:00-17:00.");
    let req = test::TestRequest::post()
        .uri(&format!("/api/manager/restaurants/{restaurant_id}/hours"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "day_of_week": "monday",
            "opening_time": "09:00:00",
            "closing_time": "17:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    println!("[<] Created.");

    println!("[>] Creating Monday 16:00-20:00 (overlaps by an hour).");
    let req = test::TestRequest::post()
        .uri(&format!("/api/manager/restaurants/{restaurant_id}/hours"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "day_of_week": "monday",
            "opening_time": "16:00:00",
            "closing_time": "20:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    println!("[>] Creating Monday 17:00-21:00 (touching boundary, no overlap).");
    let req = test::TestRequest::post()
        .uri(&format!("/api/manager/restaurants/{restaurant_id}/hours"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "day_of_week": "monday",
            "opening_time": "17:00:00",
            "closing_time": "21:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Creating Tuesday 16:00-20:00 (other day, no conflict).");
    let req = test::TestRequest::post()
        .uri(&format!("/api/manager/restaurants/{restaurant_id}/hours"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "day_of_week": "tuesday",
            "opening_time": "16:00:00",
            "closing_time": "20:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    println!("[/] Test passed: overlap rejected, boundary and other-day accepted.");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_update_excludes_own_window_from_conflict_scan() {
    println!("\n\n[+] Running test: test_update_excludes_own_window_from_conflict_scan");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let manager = test_data::sample_manager();
    let token = client.register_and_login(&app, &manager).await;
    let restaurant_id = create_restaurant(&app, &token).await;

    println!("[>] Creating Friday 09:00-17:00.");
    let req = test::TestRequest::post()
        .uri(&format!("/api/manager/restaurants/{restaurant_id}/hours"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "day_of_week": "friday",
            "opening_time": "09:00:00",
            "closing_time": "17:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let hours_id = body["hours_id"].as_str().unwrap().to_string();

    println!("[>] Widening the same window to 08:00-18:00.");
    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/manager/restaurants/{restaurant_id}/hours/{hours_id}"
        ))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "day_of_week": "friday",
            "opening_time": "08:00:00",
            "closing_time": "18:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["opening_time"], "08:00:00");
    assert_eq!(body["closing_time"], "18:00:00");
    println!("[/] Test passed: self-overlap did not count as a conflict.");
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn test_hours_are_scoped_to_the_owning_manager() {
    println!("\n\n[+] Running test: test_hours_are_scoped_to_the_owning_manager");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let owner = test_data::sample_manager();
    let owner_token = client.register_and_login(&app, &owner).await;
    let restaurant_id = create_restaurant(&app, &owner_token).await;

    let intruder = test_data::sample_manager();
    let intruder_token = client.register_and_login(&app, &intruder).await;

    println!("[>] Intruder manager posts hours for a restaurant they do not own.");
    let req = test::TestRequest::post()
        .uri(&format!("/api/manager/restaurants/{restaurant_id}/hours"))
        .insert_header(("Authorization", format!("Bearer {intruder_token}")))
        .set_json(json!({
            "day_of_week": "monday",
            "opening_time": "09:00:00",
            "closing_time": "17:00:00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Response status: {}.", resp.status());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: foreign restaurant is invisible to the intruder.");
}
