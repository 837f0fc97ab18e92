use chrono::{DateTime, Utc};
use entity::reservation::ReservationStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub reservation_time: DateTime<Utc>,
    pub party_size: i32,
    pub special_requests: Option<String>,
}

impl ReservationCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_party_size(self.party_size)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub reservation_time: Option<DateTime<Utc>>,
    pub party_size: Option<i32>,
    /// Omitted field leaves the stored value alone; an explicit `null`
    /// clears it.
    #[serde(default, deserialize_with = "double_option")]
    pub special_requests: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ReservationUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.party_size {
            Some(size) => validate_party_size(size),
            None => Ok(()),
        }
    }
}

fn validate_party_size(size: i32) -> Result<(), AppError> {
    if size > 0 {
        Ok(())
    } else {
        Err(AppError::Validation(
            "party_size must be greater than zero".to_string(),
        ))
    }
}

#[derive(Serialize, Deserialize)]
pub struct ReservationResponse {
    pub reservation_id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub reservation_time: DateTime<Utc>,
    pub party_size: i32,
    pub status: ReservationStatus,
    pub confirmation_code: String,
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

impl ReservationResponse {
    pub fn from_model(r: entity::reservation::Model, restaurant_name: Option<String>) -> Self {
        ReservationResponse {
            reservation_id: r.id,
            restaurant_id: r.restaurant_id,
            table_id: r.table_id,
            reservation_time: r.reservation_time,
            party_size: r.party_size,
            status: r.status,
            confirmation_code: r.confirmation_code,
            special_requests: r.special_requests,
            restaurant_name,
        }
    }
}

impl From<entity::reservation::Model> for ReservationResponse {
    fn from(r: entity::reservation::Model) -> Self {
        ReservationResponse::from_model(r, None)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotCreate {
    pub slot_time: DateTime<Utc>,
    pub available_tables: i32,
}

impl SlotCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.available_tables < 0 {
            return Err(AppError::Validation(
                "available_tables must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct SlotResponse {
    pub slot_id: Uuid,
    pub restaurant_id: Uuid,
    pub slot_time: DateTime<Utc>,
    pub available_tables: i32,
    pub is_active: bool,
}

impl From<entity::reservation_slot::Model> for SlotResponse {
    fn from(s: entity::reservation_slot::Model) -> Self {
        SlotResponse {
            slot_id: s.id,
            restaurant_id: s.restaurant_id,
            slot_time: s.slot_time,
            available_tables: s.available_tables,
            is_active: s.is_active,
        }
    }
}
