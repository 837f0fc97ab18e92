use actix_web::{get, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::reservation::ReservationResponse;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/restaurants/{restaurant_id}/reservations")]
async fn list_for_restaurant(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<ReservationResponse>> {
    identity.require_role(UserRole::RestaurantManager)?;
    let reservations = db
        .list_reservations_for_restaurant(&identity.user_id, &path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(
        reservations.into_iter().map(Into::into).collect(),
    ))
}
