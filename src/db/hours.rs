use crate::db::postgres_service::PostgresService;
use crate::scheduling::{conflicts_with_any, TimeRange};
use crate::types::error::AppError;
use crate::types::hours::OperatingHoursCreate;
use crate::utils::token::new_id;
use entity::operating_hours::{
    ActiveModel as HoursActive, Entity as OperatingHours, Model as HoursModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

const CONFLICT_DETAIL: &str = "Operating hours conflict: the specified time frame overlaps \
                               with an existing schedule for this day.";

fn stored_range(h: &HoursModel) -> TimeRange {
    TimeRange {
        start: h.opening_time,
        end: h.closing_time,
    }
}

impl PostgresService {
    pub async fn list_hours(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> Result<Vec<HoursModel>, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        let hours = OperatingHours::find()
            .filter(entity::operating_hours::Column::RestaurantId.eq(*restaurant_id))
            .order_by_asc(entity::operating_hours::Column::OpeningTime)
            .all(&self.db)
            .await?;
        if hours.is_empty() {
            return Err(AppError::NotFound(
                "No operating hours found for this restaurant".to_string(),
            ));
        }
        Ok(hours)
    }

    /// Conflict scan and insert share one transaction so a concurrent create
    /// cannot slip between the check and the write.
    pub async fn create_hours(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        payload: OperatingHoursCreate,
    ) -> Result<HoursModel, AppError> {
        let candidate = payload.time_range()?;
        let txn = self.db.begin().await?;
        self.owned_restaurant(&txn, restaurant_id, user_id).await?;

        let existing = same_day_hours(&txn, restaurant_id, payload.day_of_week, None).await?;
        let stored: Vec<TimeRange> = existing.iter().map(stored_range).collect();
        if conflicts_with_any(&candidate, &stored) {
            txn.rollback().await?;
            return Err(AppError::Conflict(CONFLICT_DETAIL.to_string()));
        }

        let created = HoursActive {
            id: Set(new_id()),
            restaurant_id: Set(*restaurant_id),
            day_of_week: Set(payload.day_of_week),
            opening_time: Set(candidate.start),
            closing_time: Set(candidate.end),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created)
    }

    /// The record under edit is excluded from the scan so an update to its
    /// own unchanged times never self-conflicts.
    pub async fn update_hours(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        hours_id: &Uuid,
        payload: OperatingHoursCreate,
    ) -> Result<HoursModel, AppError> {
        let candidate = payload.time_range()?;
        let txn = self.db.begin().await?;
        self.owned_restaurant(&txn, restaurant_id, user_id).await?;

        let record = OperatingHours::find()
            .filter(entity::operating_hours::Column::Id.eq(*hours_id))
            .filter(entity::operating_hours::Column::RestaurantId.eq(*restaurant_id))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Operating hours not found".to_string()))?;

        let others =
            same_day_hours(&txn, restaurant_id, payload.day_of_week, Some(hours_id)).await?;
        let stored: Vec<TimeRange> = others.iter().map(stored_range).collect();
        if conflicts_with_any(&candidate, &stored) {
            txn.rollback().await?;
            return Err(AppError::Conflict(CONFLICT_DETAIL.to_string()));
        }

        let mut am: HoursActive = record.into();
        am.day_of_week = Set(payload.day_of_week);
        am.opening_time = Set(candidate.start);
        am.closing_time = Set(candidate.end);
        let updated = am.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    pub async fn delete_hours(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
        hours_id: &Uuid,
    ) -> Result<(), AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        let record = OperatingHours::find()
            .filter(entity::operating_hours::Column::Id.eq(*hours_id))
            .filter(entity::operating_hours::Column::RestaurantId.eq(*restaurant_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Operating hours not found".to_string()))?;
        record.delete(&self.db).await?;
        Ok(())
    }
}

async fn same_day_hours<C: ConnectionTrait>(
    conn: &C,
    restaurant_id: &Uuid,
    day: entity::operating_hours::DayOfWeek,
    exclude: Option<&Uuid>,
) -> Result<Vec<HoursModel>, AppError> {
    let mut query = OperatingHours::find()
        .filter(entity::operating_hours::Column::RestaurantId.eq(*restaurant_id))
        .filter(entity::operating_hours::Column::DayOfWeek.eq(day));
    if let Some(id) = exclude {
        query = query.filter(entity::operating_hours::Column::Id.ne(*id));
    }
    Ok(query.all(conn).await?)
}
