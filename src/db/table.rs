use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::table::{TableCreate, TableUpdate};
use crate::utils::token::new_id;
use entity::dining_table::{
    ActiveModel as TableActive, Entity as DiningTable, Model as TableModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn add_table(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        payload: TableCreate,
    ) -> Result<TableModel, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        Ok(TableActive {
            id: Set(new_id()),
            restaurant_id: Set(*restaurant_id),
            table_number: Set(payload.table_number),
            capacity: Set(payload.capacity),
            is_active: Set(payload.is_active),
        }
        .insert(&self.db)
        .await?)
    }

    pub async fn list_tables(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> Result<Vec<TableModel>, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        Ok(DiningTable::find()
            .filter(entity::dining_table::Column::RestaurantId.eq(*restaurant_id))
            .order_by_asc(entity::dining_table::Column::TableNumber)
            .all(&self.db)
            .await?)
    }

    async fn get_table(
        &self,
        restaurant_id: &Uuid,
        table_id: &Uuid,
    ) -> Result<TableModel, AppError> {
        DiningTable::find()
            .filter(entity::dining_table::Column::Id.eq(*table_id))
            .filter(entity::dining_table::Column::RestaurantId.eq(*restaurant_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))
    }

    pub async fn update_table(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        table_id: &Uuid,
        payload: TableUpdate,
    ) -> Result<TableModel, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        let table = self.get_table(restaurant_id, table_id).await?;
        let mut am: TableActive = table.into();
        if let Some(table_number) = payload.table_number {
            am.table_number = Set(table_number);
        }
        if let Some(capacity) = payload.capacity {
            am.capacity = Set(capacity);
        }
        if let Some(is_active) = payload.is_active {
            am.is_active = Set(is_active);
        }
        Ok(am.update(&self.db).await?)
    }

    /// Soft delete: reservations keep a valid table reference.
    pub async fn deactivate_table(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        table_id: &Uuid,
    ) -> Result<(), AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        let table = self.get_table(restaurant_id, table_id).await?;
        let mut am: TableActive = table.into();
        am.is_active = Set(false);
        am.update(&self.db).await?;
        Ok(())
    }
}
