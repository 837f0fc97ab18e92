use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::utils::token::{construct_token, encrypt, verify};

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RegisterRequest>,
) -> ApiResult<UserResponse> {
    let body = body.into_inner();
    body.validate()?;

    let password_hash = encrypt(&body.password)
        .map_err(|e| AppError::Internal(format!("failed to hash password: {e}")))?;

    let user = db.register_user(&body, password_hash).await?;
    Ok(ApiResponse::Created(user.into()))
}

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    // A missing user and a bad password fail identically.
    let user = match db.get_user_by_email(&body.email).await {
        Ok(user) => user,
        Err(_) => return Err(AppError::Unauthorized),
    };
    if !verify(&body.password, &user.password_hash).unwrap_or(false) {
        return Err(AppError::Unauthorized);
    }

    let secret = db.rotate_bearer_secret(&user.id).await?;
    let token = construct_token(&user.id, &secret);

    Ok(ApiResponse::Ok(LoginResponse {
        token,
        user: user.into(),
    }))
}
