use actix_web::{delete, get, put, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::restaurant::RestaurantResponse;

#[get("/restaurants")]
async fn list_restaurants(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<RestaurantResponse>> {
    identity.require_role(UserRole::Admin)?;
    let restaurants = db.list_all_restaurants().await?;
    Ok(ApiResponse::Ok(
        restaurants.into_iter().map(Into::into).collect(),
    ))
}

#[get("/restaurants/pending")]
async fn list_pending_restaurants(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<RestaurantResponse>> {
    identity.require_role(UserRole::Admin)?;
    let restaurants = db.list_pending_restaurants().await?;
    Ok(ApiResponse::Ok(
        restaurants.into_iter().map(Into::into).collect(),
    ))
}

#[put("/restaurants/{restaurant_id}/approve")]
async fn approve_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<RestaurantResponse> {
    identity.require_role(UserRole::Admin)?;
    let restaurant = db
        .set_restaurant_approval(&path.into_inner(), true)
        .await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}

#[put("/restaurants/{restaurant_id}/reject")]
async fn reject_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<RestaurantResponse> {
    identity.require_role(UserRole::Admin)?;
    let restaurant = db
        .set_restaurant_approval(&path.into_inner(), false)
        .await?;
    Ok(ApiResponse::Ok(restaurant.into()))
}

#[delete("/restaurants/{restaurant_id}")]
async fn delete_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    identity.require_role(UserRole::Admin)?;
    db.delete_restaurant_admin(&path.into_inner()).await?;
    Ok(ApiResponse::NoContent)
}
