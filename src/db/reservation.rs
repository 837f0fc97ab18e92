use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::reservation::{ReservationCreate, ReservationUpdate};
use crate::utils::token::{new_confirmation_code, new_id};
use chrono::Utc;
use entity::customer::{Entity as Customer, Model as CustomerModel};
use entity::dining_table::Entity as DiningTable;
use entity::reservation::{
    ActiveModel as ReservationActive, Entity as Reservation, Model as ReservationModel,
    ReservationStatus,
};
use entity::restaurant::Entity as Restaurant;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn get_customer_by_user_id(&self, user_id: &Uuid) -> Result<CustomerModel, AppError> {
        customer_by_user_id(&self.db, user_id).await
    }

    /// Booking is one transaction: table/restaurant validation, the slot
    /// claim and the reservation insert either all land or none do.
    pub async fn book_reservation(
        &self,
        user_id: &Uuid,
        payload: ReservationCreate,
    ) -> Result<(ReservationModel, String), AppError> {
        let txn = self.db.begin().await?;

        let customer = customer_by_user_id(&txn, user_id).await?;

        let table = DiningTable::find()
            .filter(entity::dining_table::Column::Id.eq(payload.table_id))
            .filter(entity::dining_table::Column::RestaurantId.eq(payload.restaurant_id))
            .filter(entity::dining_table::Column::IsActive.eq(true))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found for this restaurant".to_string()))?;

        let restaurant = Restaurant::find_by_id(payload.restaurant_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        self.claim_slot(&txn, &restaurant.id, payload.reservation_time)
            .await?;

        let now = Utc::now();
        let reservation = ReservationActive {
            id: Set(new_id()),
            customer_id: Set(customer.id),
            restaurant_id: Set(restaurant.id),
            table_id: Set(table.id),
            reservation_time: Set(payload.reservation_time),
            party_size: Set(payload.party_size),
            status: Set(ReservationStatus::Confirmed),
            confirmation_code: Set(new_confirmation_code()),
            special_requests: Set(payload.special_requests),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((reservation, restaurant.name))
    }

    pub async fn list_reservations_for_customer(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<(ReservationModel, Option<String>)>, AppError> {
        let customer = self.get_customer_by_user_id(user_id).await?;
        let rows = Reservation::find()
            .filter(entity::reservation::Column::CustomerId.eq(customer.id))
            .find_also_related(Restaurant)
            .order_by_asc(entity::reservation::Column::ReservationTime)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(reservation, restaurant)| (reservation, restaurant.map(|r| r.name)))
            .collect())
    }

    /// Scoped by customer_id so a foreign reservation looks like it does not
    /// exist. A time change releases the old slot and claims one at the new
    /// time inside the same transaction.
    pub async fn update_reservation(
        &self,
        user_id: &Uuid,
        reservation_id: &Uuid,
        payload: ReservationUpdate,
    ) -> Result<ReservationModel, AppError> {
        let txn = self.db.begin().await?;

        let customer = customer_by_user_id(&txn, user_id).await?;
        let reservation = owned_reservation(&txn, reservation_id, &customer.id).await?;

        if reservation.status == ReservationStatus::Cancelled {
            txn.rollback().await?;
            return Err(AppError::Conflict(
                "Cancelled reservations cannot be updated".to_string(),
            ));
        }

        let mut am: ReservationActive = reservation.clone().into();

        if let Some(new_time) = payload.reservation_time {
            if new_time != reservation.reservation_time {
                DiningTable::find()
                    .filter(entity::dining_table::Column::Id.eq(reservation.table_id))
                    .filter(entity::dining_table::Column::IsActive.eq(true))
                    .one(&txn)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound("Table is no longer available".to_string())
                    })?;
                self.release_slot(&txn, &reservation.restaurant_id, reservation.reservation_time)
                    .await?;
                self.claim_slot(&txn, &reservation.restaurant_id, new_time)
                    .await?;
                am.reservation_time = Set(new_time);
            }
        }
        if let Some(party_size) = payload.party_size {
            am.party_size = Set(party_size);
        }
        if let Some(special_requests) = payload.special_requests {
            am.special_requests = Set(special_requests);
        }
        am.updated_at = Set(Utc::now());
        let updated = am.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Cancellation keeps the row (status flip) and hands the slot back.
    pub async fn cancel_reservation(
        &self,
        user_id: &Uuid,
        reservation_id: &Uuid,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let customer = customer_by_user_id(&txn, user_id).await?;
        let reservation = owned_reservation(&txn, reservation_id, &customer.id).await?;

        if reservation.status == ReservationStatus::Cancelled {
            txn.rollback().await?;
            return Err(AppError::Conflict(
                "Reservation is already cancelled".to_string(),
            ));
        }

        self.release_slot(&txn, &reservation.restaurant_id, reservation.reservation_time)
            .await?;

        let mut am: ReservationActive = reservation.into();
        am.status = Set(ReservationStatus::Cancelled);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    pub async fn list_reservations_for_restaurant(
        &self,
        user_id: &Uuid,
        restaurant_id: &Uuid,
    ) -> Result<Vec<ReservationModel>, AppError> {
        self.get_owned_restaurant(restaurant_id, user_id).await?;
        Ok(Reservation::find()
            .filter(entity::reservation::Column::RestaurantId.eq(*restaurant_id))
            .order_by_asc(entity::reservation::Column::ReservationTime)
            .all(&self.db)
            .await?)
    }
}

async fn customer_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: &Uuid,
) -> Result<CustomerModel, AppError> {
    Customer::find()
        .filter(entity::customer::Column::UserId.eq(*user_id))
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
}

async fn owned_reservation<C: ConnectionTrait>(
    conn: &C,
    reservation_id: &Uuid,
    customer_id: &Uuid,
) -> Result<ReservationModel, AppError> {
    Reservation::find()
        .filter(entity::reservation::Column::Id.eq(*reservation_id))
        .filter(entity::reservation::Column::CustomerId.eq(*customer_id))
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
}
