use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::RegisterRequest};
use crate::utils::token::{encrypt, new_id, new_secret};
use chrono::Utc;
use entity::customer::{ActiveModel as CustomerActive, NotificationPreference};
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, UserRole};
use entity::{admin, restaurant_manager};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Registration: user row plus exactly one role-extension row, in a
    /// single transaction.
    pub async fn register_user(
        &self,
        payload: &RegisterRequest,
        password_hash: String,
    ) -> Result<UserModel, AppError> {
        let uid = new_id();
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let already_taken = User::find()
            .filter(entity::user::Column::Email.eq(payload.email.clone()))
            .count(&txn)
            .await?
            > 0;
        if already_taken {
            txn.rollback().await?;
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let user = UserActive {
            id: Set(uid),
            email: Set(payload.email.clone()),
            password_hash: Set(password_hash),
            auth_hash: Set(String::new()),
            phone_number: Set(payload.phone_number.clone()),
            first_name: Set(payload.first_name.clone()),
            last_name: Set(payload.last_name.clone()),
            role: Set(payload.role),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        match payload.role {
            UserRole::Customer => {
                CustomerActive {
                    id: Set(new_id()),
                    user_id: Set(uid),
                    notification_preference: Set(NotificationPreference::Email),
                }
                .insert(&txn)
                .await?;
            }
            UserRole::RestaurantManager => {
                restaurant_manager::ActiveModel {
                    id: Set(new_id()),
                    user_id: Set(uid),
                    approved_at: Set(None),
                }
                .insert(&txn)
                .await?;
            }
            UserRole::Admin => {
                admin::ActiveModel {
                    id: Set(new_id()),
                    user_id: Set(uid),
                }
                .insert(&txn)
                .await?;
            }
        }

        txn.commit().await?;
        Ok(user)
    }

    /// Rotates the caller's bearer secret and returns the raw value; only
    /// the argon2 hash is stored.
    pub async fn rotate_bearer_secret(&self, user_id: &Uuid) -> Result<String, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let secret = new_secret();
        let encrypted = encrypt(&secret)
            .map_err(|e| AppError::Internal(format!("failed to hash secret: {e}")))?;
        let mut am: UserActive = user.into();
        am.auth_hash = Set(encrypted);
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(secret)
    }
}
