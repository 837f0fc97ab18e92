use crate::types::error::AppError;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use entity::user::UserRole;
use std::future::{ready, Ready};
use uuid::Uuid;

/// Caller identity resolved by the bearer middleware and stashed in the
/// request extensions.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

impl Identity {
    /// Single authorization predicate used by every role-gated handler.
    pub fn require_role(&self, role: UserRole) -> Result<(), AppError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Not authorized to perform this action".to_string(),
            ))
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // No identity in the extensions means the request never passed the
        // bearer middleware, i.e. the caller is not authenticated at all.
        ready(
            req.extensions()
                .get::<Identity>()
                .cloned()
                .ok_or_else(|| AppError::Forbidden("Not authenticated".to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(role: UserRole) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "someone@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn matching_role_passes() {
        assert!(identity(UserRole::Customer)
            .require_role(UserRole::Customer)
            .is_ok());
        assert!(identity(UserRole::Admin).require_role(UserRole::Admin).is_ok());
    }

    #[test]
    fn role_mismatch_is_forbidden() {
        let err = identity(UserRole::RestaurantManager)
            .require_role(UserRole::Customer)
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[actix_web::test]
    async fn unauthenticated_request_extracts_as_forbidden() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let err = Identity::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(err.to_string(), "Not authenticated");
    }

    #[actix_web::test]
    async fn stashed_identity_extracts_back_out() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        req.extensions_mut().insert(identity(UserRole::Customer));
        let extracted = Identity::extract(&req).await.unwrap();
        assert_eq!(extracted.role, UserRole::Customer);
    }
}
