use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod auth;
pub mod health;
pub mod manager;
pub mod reservations;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer_auth = HttpAuthentication::with_fn(validate_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/api")
            .service(auth::register)
            .service(auth::login)
            .service(
                web::scope("/manager")
                    .wrap(bearer_auth.clone())
                    .service(manager::restaurants::create_restaurant)
                    .service(manager::restaurants::list_restaurants)
                    .service(manager::restaurants::get_restaurant)
                    .service(manager::restaurants::update_restaurant)
                    .service(manager::restaurants::delete_restaurant)
                    .service(manager::tables::add_table)
                    .service(manager::tables::list_tables)
                    .service(manager::tables::update_table)
                    .service(manager::tables::delete_table)
                    .service(manager::hours::create_hours)
                    .service(manager::hours::list_hours)
                    .service(manager::hours::update_hours)
                    .service(manager::hours::delete_hours)
                    .service(manager::slots::create_slot)
                    .service(manager::slots::list_slots),
            )
            .service(
                web::scope("/admin")
                    .wrap(bearer_auth.clone())
                    .service(admin::list_pending_restaurants)
                    .service(admin::list_restaurants)
                    .service(admin::approve_restaurant)
                    .service(admin::reject_restaurant)
                    .service(admin::delete_restaurant),
            ),
    );

    cfg.service(
        web::scope("/reservations")
            .wrap(bearer_auth.clone())
            .service(reservations::book)
            .service(reservations::list)
            .service(reservations::update)
            .service(reservations::cancel),
    );
    cfg.service(
        web::scope("/restaurants")
            .wrap(bearer_auth.clone())
            .service(reservations::availability),
    );
    cfg.service(
        web::scope("/manager")
            .wrap(bearer_auth)
            .service(manager::reservations::list_for_restaurant),
    );
}
