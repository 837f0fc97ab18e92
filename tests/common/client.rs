use actix_web::{test, web, App};
use booktable::{db::postgres_service::PostgresService, routes::configure_routes};
use serde_json::Value;
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(configure_routes)
    }

    /// Registers the given user through the API and returns a bearer token
    /// obtained from the login route.
    #[allow(dead_code)]
    pub async fn register_and_login<S>(&self, app: &S, user: &Value) -> String
    where
        S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    {
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(user)
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({
                "email": user["email"],
                "password": user["password"],
            }))
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        body["token"].as_str().expect("login token").to_string()
    }
}
