use chrono::NaiveTime;
use entity::operating_hours::DayOfWeek;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scheduling::TimeRange;
use crate::types::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct OperatingHoursCreate {
    pub day_of_week: DayOfWeek,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl OperatingHoursCreate {
    /// Rejects inverted or empty windows.
    pub fn time_range(&self) -> Result<TimeRange, AppError> {
        TimeRange::new(self.opening_time, self.closing_time)
    }
}

#[derive(Serialize, Deserialize)]
pub struct OperatingHoursResponse {
    pub hours_id: Uuid,
    pub restaurant_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl From<entity::operating_hours::Model> for OperatingHoursResponse {
    fn from(h: entity::operating_hours::Model) -> Self {
        OperatingHoursResponse {
            hours_id: h.id,
            restaurant_id: h.restaurant_id,
            day_of_week: h.day_of_week,
            opening_time: h.opening_time,
            closing_time: h.closing_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_window_is_rejected() {
        let req = OperatingHoursCreate {
            day_of_week: DayOfWeek::Monday,
            opening_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert!(matches!(req.time_range(), Err(AppError::Validation(_))));
    }

    #[test]
    fn day_of_week_serializes_snake_case() {
        let json = serde_json::to_string(&DayOfWeek::Monday).unwrap();
        assert_eq!(json, "\"monday\"");
    }
}
