use actix_web::{delete, get, post, put, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::hours::{OperatingHoursCreate, OperatingHoursResponse};
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};

#[post("/restaurants/{restaurant_id}/hours")]
async fn create_hours(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<OperatingHoursCreate>,
) -> ApiResult<OperatingHoursResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let hours = db
        .create_hours(&identity.user_id, &path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::Created(hours.into()))
}

#[get("/restaurants/{restaurant_id}/hours")]
async fn list_hours(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<OperatingHoursResponse>> {
    identity.require_role(UserRole::RestaurantManager)?;
    let hours = db
        .list_hours(&identity.user_id, &path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(hours.into_iter().map(Into::into).collect()))
}

#[put("/restaurants/{restaurant_id}/hours/{hours_id}")]
async fn update_hours(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<OperatingHoursCreate>,
) -> ApiResult<OperatingHoursResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let (restaurant_id, hours_id) = path.into_inner();
    let hours = db
        .update_hours(
            &identity.user_id,
            &restaurant_id,
            &hours_id,
            body.into_inner(),
        )
        .await?;
    Ok(ApiResponse::Ok(hours.into()))
}

#[delete("/restaurants/{restaurant_id}/hours/{hours_id}")]
async fn delete_hours(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<()> {
    identity.require_role(UserRole::RestaurantManager)?;
    let (restaurant_id, hours_id) = path.into_inner();
    db.delete_hours(&identity.user_id, &restaurant_id, &hours_id)
        .await?;
    Ok(ApiResponse::NoContent)
}
