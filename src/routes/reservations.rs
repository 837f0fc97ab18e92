use actix_web::{delete, get, post, put, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::reservation::{
    ReservationCreate, ReservationResponse, ReservationUpdate, SlotResponse,
};
use crate::types::response::{ApiResponse, ApiResult};

#[post("")]
async fn book(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<ReservationCreate>,
) -> ApiResult<ReservationResponse> {
    identity.require_role(UserRole::Customer)?;
    let body = body.into_inner();
    body.validate()?;

    let (reservation, restaurant_name) = db.book_reservation(&identity.user_id, body).await?;
    Ok(ApiResponse::Created(ReservationResponse::from_model(
        reservation,
        Some(restaurant_name),
    )))
}

#[get("")]
async fn list(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<Vec<ReservationResponse>> {
    identity.require_role(UserRole::Customer)?;
    let reservations = db.list_reservations_for_customer(&identity.user_id).await?;
    Ok(ApiResponse::Ok(
        reservations
            .into_iter()
            .map(|(reservation, name)| ReservationResponse::from_model(reservation, name))
            .collect(),
    ))
}

#[put("/{reservation_id}")]
async fn update(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<ReservationUpdate>,
) -> ApiResult<ReservationResponse> {
    identity.require_role(UserRole::Customer)?;
    let body = body.into_inner();
    body.validate()?;

    let reservation = db
        .update_reservation(&identity.user_id, &path.into_inner(), body)
        .await?;
    Ok(ApiResponse::Ok(reservation.into()))
}

#[delete("/{reservation_id}")]
async fn cancel(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    identity.require_role(UserRole::Customer)?;
    db.cancel_reservation(&identity.user_id, &path.into_inner())
        .await?;
    Ok(ApiResponse::NoContent)
}

/// Open to any authenticated caller; customers browse availability before
/// holding a table.
#[get("/{restaurant_id}/availability")]
async fn availability(
    _identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<SlotResponse>> {
    let slots = db.list_availability(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(slots.into_iter().map(Into::into).collect()))
}
