use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::restaurant::{RestaurantCreate, RestaurantUpdate};
use crate::utils::token::new_id;
use chrono::Utc;
use entity::restaurant::{
    ActiveModel as RestaurantActive, Entity as Restaurant, Model as RestaurantModel,
};
use entity::restaurant_manager::{Entity as RestaurantManager, Model as ManagerModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_manager_by_user_id(&self, user_id: &Uuid) -> Result<ManagerModel, AppError> {
        Ok(RestaurantManager::find()
            .filter(entity::restaurant_manager::Column::UserId.eq(*user_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Manager not found".into()))?)
    }

    pub async fn create_restaurant(
        &self,
        user_id: &Uuid,
        payload: RestaurantCreate,
    ) -> Result<RestaurantModel, AppError> {
        let manager = self.get_manager_by_user_id(user_id).await?;
        let now = Utc::now();
        Ok(RestaurantActive {
            id: Set(new_id()),
            manager_id: Set(manager.id),
            name: Set(payload.name),
            description: Set(payload.description),
            address_line1: Set(payload.address_line1),
            address_line2: Set(payload.address_line2),
            city: Set(payload.city),
            state: Set(payload.state),
            zip_code: Set(payload.zip_code),
            phone_number: Set(payload.phone_number),
            email: Set(payload.email),
            cuisine_type: Set(payload.cuisine_type),
            cost_rating: Set(payload.cost_rating),
            is_approved: Set(false),
            approved_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn list_restaurants_for_manager(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<RestaurantModel>, AppError> {
        let manager = self.get_manager_by_user_id(user_id).await?;
        Ok(Restaurant::find()
            .filter(entity::restaurant::Column::ManagerId.eq(manager.id))
            .order_by_asc(entity::restaurant::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Ownership-scoping primitive shared by the restaurant, table, hours,
    /// slot and manager-reservation paths: the row is only visible when the
    /// restaurant's manager maps back to the calling user.
    pub(crate) async fn owned_restaurant<C: ConnectionTrait>(
        &self,
        conn: &C,
        restaurant_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<RestaurantModel, AppError> {
        Restaurant::find()
            .filter(entity::restaurant::Column::Id.eq(*restaurant_id))
            .inner_join(RestaurantManager)
            .filter(entity::restaurant_manager::Column::UserId.eq(*user_id))
            .one(conn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Restaurant not found or not managed by you".to_string())
            })
    }

    pub async fn get_owned_restaurant(
        &self,
        restaurant_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<RestaurantModel, AppError> {
        self.owned_restaurant(&self.db, restaurant_id, user_id).await
    }

    pub async fn update_restaurant(
        &self,
        restaurant_id: &Uuid,
        user_id: &Uuid,
        payload: RestaurantUpdate,
    ) -> Result<RestaurantModel, AppError> {
        let restaurant = self.get_owned_restaurant(restaurant_id, user_id).await?;
        let mut am: RestaurantActive = restaurant.into();
        if let Some(name) = payload.name {
            am.name = Set(name);
        }
        if let Some(description) = payload.description {
            am.description = Set(Some(description));
        }
        if let Some(address_line1) = payload.address_line1 {
            am.address_line1 = Set(address_line1);
        }
        if let Some(address_line2) = payload.address_line2 {
            am.address_line2 = Set(Some(address_line2));
        }
        if let Some(city) = payload.city {
            am.city = Set(city);
        }
        if let Some(state) = payload.state {
            am.state = Set(state);
        }
        if let Some(zip_code) = payload.zip_code {
            am.zip_code = Set(zip_code);
        }
        if let Some(phone_number) = payload.phone_number {
            am.phone_number = Set(phone_number);
        }
        if let Some(email) = payload.email {
            am.email = Set(email);
        }
        if let Some(cuisine_type) = payload.cuisine_type {
            am.cuisine_type = Set(cuisine_type);
        }
        if let Some(cost_rating) = payload.cost_rating {
            am.cost_rating = Set(cost_rating);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_owned_restaurant(
        &self,
        restaurant_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<(), AppError> {
        let restaurant = self.get_owned_restaurant(restaurant_id, user_id).await?;
        restaurant.delete(&self.db).await?;
        Ok(())
    }

    // Admin surface

    pub async fn get_restaurant(&self, restaurant_id: &Uuid) -> Result<RestaurantModel, AppError> {
        Restaurant::find_by_id(*restaurant_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))
    }

    pub async fn list_all_restaurants(&self) -> Result<Vec<RestaurantModel>, AppError> {
        Ok(Restaurant::find()
            .order_by_asc(entity::restaurant::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn list_pending_restaurants(&self) -> Result<Vec<RestaurantModel>, AppError> {
        Ok(Restaurant::find()
            .filter(entity::restaurant::Column::IsApproved.eq(false))
            .order_by_asc(entity::restaurant::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    /// Approve stamps `approved_at`; reject clears it.
    pub async fn set_restaurant_approval(
        &self,
        restaurant_id: &Uuid,
        approved: bool,
    ) -> Result<RestaurantModel, AppError> {
        let restaurant = self.get_restaurant(restaurant_id).await?;
        let mut am: RestaurantActive = restaurant.into();
        am.is_approved = Set(approved);
        am.approved_at = Set(approved.then(Utc::now));
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_restaurant_admin(&self, restaurant_id: &Uuid) -> Result<(), AppError> {
        let restaurant = self.get_restaurant(restaurant_id).await?;
        restaurant.delete(&self.db).await?;
        Ok(())
    }
}
