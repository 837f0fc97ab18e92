use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

fn default_active() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableCreate {
    pub table_number: String,
    pub capacity: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl TableCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.capacity <= 0 {
            return Err(AppError::Validation(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TableUpdate {
    pub table_number: Option<String>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}

impl TableUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(capacity) = self.capacity {
            if capacity <= 0 {
                return Err(AppError::Validation(
                    "capacity must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct TableResponse {
    pub table_id: Uuid,
    pub restaurant_id: Uuid,
    pub table_number: String,
    pub capacity: i32,
    pub is_active: bool,
}

impl From<entity::dining_table::Model> for TableResponse {
    fn from(t: entity::dining_table::Model) -> Self {
        TableResponse {
            table_id: t.id,
            restaurant_id: t.restaurant_id,
            table_number: t.table_number,
            capacity: t.capacity,
            is_active: t.is_active,
        }
    }
}
