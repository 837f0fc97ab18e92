use chrono::{DateTime, Utc};
use entity::restaurant::CuisineType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub description: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
    pub email: String,
    pub cuisine_type: CuisineType,
    pub cost_rating: i16,
}

impl RestaurantCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_cost_rating(self.cost_rating)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub cuisine_type: Option<CuisineType>,
    pub cost_rating: Option<i16>,
}

impl RestaurantUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.cost_rating {
            Some(rating) => validate_cost_rating(rating),
            None => Ok(()),
        }
    }
}

fn validate_cost_rating(rating: i16) -> Result<(), AppError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::Validation(
            "cost_rating must be between 1 and 5".to_string(),
        ))
    }
}

#[derive(Serialize, Deserialize)]
pub struct RestaurantResponse {
    pub restaurant_id: Uuid,
    pub manager_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone_number: String,
    pub email: String,
    pub cuisine_type: CuisineType,
    pub cost_rating: i16,
    pub is_approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::restaurant::Model> for RestaurantResponse {
    fn from(r: entity::restaurant::Model) -> Self {
        RestaurantResponse {
            restaurant_id: r.id,
            manager_id: r.manager_id,
            name: r.name,
            description: r.description,
            address_line1: r.address_line1,
            address_line2: r.address_line2,
            city: r.city,
            state: r.state,
            zip_code: r.zip_code,
            phone_number: r.phone_number,
            email: r.email,
            cuisine_type: r.cuisine_type,
            cost_rating: r.cost_rating,
            is_approved: r.is_approved,
            approved_at: r.approved_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_rating_bounds() {
        assert!(validate_cost_rating(1).is_ok());
        assert!(validate_cost_rating(5).is_ok());
        assert!(validate_cost_rating(0).is_err());
        assert!(validate_cost_rating(6).is_err());
    }
}
