use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::reservation::SlotCreate;
use crate::utils::token::new_id;
use chrono::{DateTime, Utc};
use entity::reservation_slot::{
    ActiveModel as SlotActive, Entity as ReservationSlot, Model as SlotModel,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn create_slot(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        payload: SlotCreate,
    ) -> Result<SlotModel, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        Ok(SlotActive {
            id: Set(new_id()),
            restaurant_id: Set(*restaurant_id),
            slot_time: Set(payload.slot_time),
            available_tables: Set(payload.available_tables),
            is_active: Set(true),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn list_slots_for_owner(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> Result<Vec<SlotModel>, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        Ok(ReservationSlot::find()
            .filter(entity::reservation_slot::Column::RestaurantId.eq(*restaurant_id))
            .order_by_asc(entity::reservation_slot::Column::SlotTime)
            .all(&self.db)
            .await?)
    }

    pub async fn list_availability(&self, restaurant_id: &Uuid) -> Result<Vec<SlotModel>, AppError> {
        self.get_restaurant(restaurant_id).await?;
        Ok(ReservationSlot::find()
            .filter(entity::reservation_slot::Column::RestaurantId.eq(*restaurant_id))
            .filter(entity::reservation_slot::Column::IsActive.eq(true))
            .order_by_asc(entity::reservation_slot::Column::SlotTime)
            .all(&self.db)
            .await?)
    }

    /// Atomic conditional decrement; zero affected rows means the slot is
    /// missing, inactive or sold out, and the booking must not proceed.
    pub(crate) async fn claim_slot<C: ConnectionTrait>(
        &self,
        conn: &C,
        restaurant_id: &Uuid,
        slot_time: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let result = ReservationSlot::update_many()
            .col_expr(
                entity::reservation_slot::Column::AvailableTables,
                Expr::col(entity::reservation_slot::Column::AvailableTables).sub(1),
            )
            .filter(entity::reservation_slot::Column::RestaurantId.eq(*restaurant_id))
            .filter(entity::reservation_slot::Column::SlotTime.eq(slot_time))
            .filter(entity::reservation_slot::Column::IsActive.eq(true))
            .filter(entity::reservation_slot::Column::AvailableTables.gt(0))
            .exec(conn)
            .await?;
        if result.rows_affected == 0 {
            return Err(AppError::Conflict(
                "No availability for the requested time".to_string(),
            ));
        }
        Ok(())
    }

    /// Restores a claim; a missing slot row is not an error so cancellation
    /// stays idempotent with respect to slot bookkeeping.
    pub(crate) async fn release_slot<C: ConnectionTrait>(
        &self,
        conn: &C,
        restaurant_id: &Uuid,
        slot_time: DateTime<Utc>,
    ) -> Result<(), AppError> {
        ReservationSlot::update_many()
            .col_expr(
                entity::reservation_slot::Column::AvailableTables,
                Expr::col(entity::reservation_slot::Column::AvailableTables).add(1),
            )
            .filter(entity::reservation_slot::Column::RestaurantId.eq(*restaurant_id))
            .filter(entity::reservation_slot::Column::SlotTime.eq(slot_time))
            .exec(conn)
            .await?;
        Ok(())
    }
}
