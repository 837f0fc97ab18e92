use actix_web::{delete, get, post, put, web};
use entity::user::UserRole;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::identity::Identity;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::table::{TableCreate, TableResponse, TableUpdate};

#[post("/restaurants/{restaurant_id}/tables")]
async fn add_table(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<TableCreate>,
) -> ApiResult<TableResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let body = body.into_inner();
    body.validate()?;

    let table = db
        .add_table(&identity.user_id, &path.into_inner(), body)
        .await?;
    Ok(ApiResponse::Created(table.into()))
}

#[get("/restaurants/{restaurant_id}/tables")]
async fn list_tables(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<TableResponse>> {
    identity.require_role(UserRole::RestaurantManager)?;
    let tables = db
        .list_tables(&identity.user_id, &path.into_inner())
        .await?;
    Ok(ApiResponse::Ok(tables.into_iter().map(Into::into).collect()))
}

#[put("/restaurants/{restaurant_id}/tables/{table_id}")]
async fn update_table(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<TableUpdate>,
) -> ApiResult<TableResponse> {
    identity.require_role(UserRole::RestaurantManager)?;
    let body = body.into_inner();
    body.validate()?;

    let (restaurant_id, table_id) = path.into_inner();
    let table = db
        .update_table(&identity.user_id, &restaurant_id, &table_id, body)
        .await?;
    Ok(ApiResponse::Ok(table.into()))
}

#[delete("/restaurants/{restaurant_id}/tables/{table_id}")]
async fn delete_table(
    identity: Identity,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<()> {
    identity.require_role(UserRole::RestaurantManager)?;
    let (restaurant_id, table_id) = path.into_inner();
    db.deactivate_table(&identity.user_id, &restaurant_id, &table_id)
        .await?;
    Ok(ApiResponse::NoContent)
}
