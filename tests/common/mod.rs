use booktable::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};
    use uuid::Uuid;

    pub fn sample_customer() -> Value {
        let id = Uuid::new_v4();
        json!({
            "email": format!("customer-{id}@test.com"),
            "password": "password123",
            "phone_number": "555-0100",
            "first_name": "John",
            "last_name": "Doe",
            "role": "customer"
        })
    }

    pub fn sample_manager() -> Value {
        let id = Uuid::new_v4();
        json!({
            "email": format!("manager-{id}@test.com"),
            "password": "password123",
            "phone_number": null,
            "first_name": "Maria",
            "last_name": "Reyes",
            "role": "restaurant_manager"
        })
    }

    #[allow(dead_code)]
    pub fn sample_admin() -> Value {
        let id = Uuid::new_v4();
        json!({
            "email": format!("admin-{id}@test.com"),
            "password": "password123",
            "phone_number": null,
            "first_name": "Ada",
            "last_name": "Ops",
            "role": "admin"
        })
    }

    pub fn sample_restaurant() -> Value {
        json!({
            "name": "Test Restaurant",
            "description": "A place to test",
            "address_line1": "123 Test St",
            "address_line2": null,
            "city": "Test City",
            "state": "TS",
            "zip_code": "12345",
            "phone_number": "123-456-7890",
            "email": "front@test-restaurant.com",
            "cuisine_type": "italian",
            "cost_rating": 3
        })
    }
}
