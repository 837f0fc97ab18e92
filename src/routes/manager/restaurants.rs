use actix_web::{delete, get, post, put, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::{RestaurantCreate, RestaurantResponse, RestaurantUpdate};

#[post("/restaurants")]
async fn create_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RestaurantCreate>,
) -> ApiResult<RestaurantResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let body = body.into_inner();
    body.validate()?;

    let restaurant = db.create_restaurant(&identity.user_id, body).await?;
    Ok(ApiResponse::Created(restaurant.into()))
}

#[get("/restaurants")]
async fn list_restaurants(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<RestaurantResponse>> {
    identity.require_role(UserRole::RestaurantManager)?;
    let restaurants = db.list_restaurants_for_manager(&identity.user_id).await?;
    Ok(ApiResponse::Ok(
        restaurants.into_iter().map(Into::into).collect(),
    ))
}

#[get("/restaurants/{restaurant_id}")]
async fn get_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<RestaurantResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let restaurant = db
        .get_owned_restaurant(&path.into_inner(), &identity.user_id)
        .await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}

#[put("/restaurants/{restaurant_id}")]
async fn update_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RestaurantUpdate>,
) -> ApiResult<RestaurantResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let body = body.into_inner();
    body.validate()?;

    let restaurant = db
        .update_restaurant(&path.into_inner(), &identity.user_id, body)
        .await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}

#[delete("/restaurants/{restaurant_id}")]
async fn delete_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    identity.require_role(UserRole::RestaurantManager)?;
    db.delete_owned_restaurant(&path.into_inner(), &identity.user_id)
        .await?;
    Ok(ApiResponse::NoContent)
}
