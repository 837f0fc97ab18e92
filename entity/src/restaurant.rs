use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum CuisineType {
    #[sea_orm(string_value = "italian")]
    Italian,
    #[sea_orm(string_value = "chinese")]
    Chinese,
    #[sea_orm(string_value = "indian")]
    Indian,
    #[sea_orm(string_value = "japanese")]
    Japanese,
    #[sea_orm(string_value = "mexican")]
    Mexican,
    #[sea_orm(string_value = "french")]
    French,
    #[sea_orm(string_value = "american")]
    American,
    #[sea_orm(string_value = "thai")]
    Thai,
    #[sea_orm(string_value = "mediterranean")]
    Mediterranean,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
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
    pub approved_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant_manager::Entity",
        from = "Column::ManagerId",
        to = "super::restaurant_manager::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RestaurantManager,
    #[sea_orm(has_many = "super::dining_table::Entity")]
    DiningTable,
    #[sea_orm(has_many = "super::operating_hours::Entity")]
    OperatingHours,
    #[sea_orm(has_many = "super::reservation_slot::Entity")]
    ReservationSlot,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::restaurant_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantManager.def()
    }
}

impl Related<super::dining_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiningTable.def()
    }
}

impl Related<super::operating_hours::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OperatingHours.def()
    }
}

impl Related<super::reservation_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationSlot.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
