use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::identity::Identity;
use crate::utils::token::{parse_token, verify};

/// Bearer middleware callback: resolves the credential to an [`Identity`]
/// and stashes it in the request extensions for the handlers' extractor.
///
/// A missing Authorization header is 403 "Not authenticated"; a present but
/// invalid credential is 401. The middleware is registered with
/// `HttpAuthentication::with_fn` so the absent case reaches us instead of
/// being turned into a 401 challenge upstream.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        return Err((
            AppError::Forbidden("Not authenticated".to_string()).into(),
            req,
        ));
    };

    let Some((user_id, secret)) = parse_token(credentials.token()) else {
        return Err((AppError::Unauthorized.into(), req));
    };

    let Some(db) = req.app_data::<web::Data<Arc<PostgresService>>>().cloned() else {
        return Err((
            AppError::Internal("database handle missing from app data".to_string()).into(),
            req,
        ));
    };

    let user = match db.get_user_by_id(&user_id).await {
        Ok(user) => user,
        Err(_) => return Err((AppError::Unauthorized.into(), req)),
    };

    if !verify(&secret, &user.auth_hash).unwrap_or(false) {
        return Err((AppError::Unauthorized.into(), req));
    }

    req.extensions_mut().insert(Identity {
        user_id: user.id,
        email: user.email,
        role: user.role,
    });

    Ok(req)
}
