use actix_web::{get, post, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::reservation::{SlotCreate, SlotResponse};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/restaurants/{restaurant_id}/slots")]
async fn create_slot(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<SlotCreate>,
) -> ApiResult<SlotResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let body = body.into_inner();
    body.validate()?;

    let slot = db
        .create_slot(&identity.user_id, &path.into_inner(), body)
        .await?;
    Ok(ApiResponse::Created(slot.into()))
}

#[get("/restaurants/{restaurant_id}/slots")]
async fn list_slots(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<SlotResponse>> {
    identity.require_role(UserRole::RestaurantManager)?;
    let slots = db
        .list_slots_for_owner(&identity.user_id, &path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(slots.into_iter().map(Into::into).collect()))
}
