use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum RestaurantManagers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Restaurants {
    Table,
    Id,
    ManagerId,
    Name,
    Description,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
    PhoneNumber,
    Email,
    CuisineType,
    CostRating,
    IsApproved,
    ApprovedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DiningTables {
    Table,
    Id,
    RestaurantId,
    TableNumber,
    Capacity,
    IsActive,
}

#[derive(DeriveIden)]
enum OperatingHours {
    Table,
    Id,
    RestaurantId,
    DayOfWeek,
    OpeningTime,
    ClosingTime,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Restaurants::Table)
                .col(ColumnDef::new(Restaurants::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Restaurants::ManagerId).uuid().not_null())
                .col(ColumnDef::new(Restaurants::Name).string_len(100).not_null())
                .col(ColumnDef::new(Restaurants::Description).text())
                .col(ColumnDef::new(Restaurants::AddressLine1).string_len(100).not_null())
                .col(ColumnDef::new(Restaurants::AddressLine2).string_len(100))
                .col(ColumnDef::new(Restaurants::City).string_len(50).not_null())
                .col(ColumnDef::new(Restaurants::State).string_len(50).not_null())
                .col(ColumnDef::new(Restaurants::ZipCode).string_len(10).not_null())
                .col(ColumnDef::new(Restaurants::PhoneNumber).string_len(20).not_null())
                .col(ColumnDef::new(Restaurants::Email).string_len(100).not_null())
                .col(ColumnDef::new(Restaurants::CuisineType).string_len(32).not_null())
                .col(
                    ColumnDef::new(Restaurants::CostRating)
                        .small_integer()
                        .not_null()
                        .check(
                            Expr::col(Restaurants::CostRating)
                                .gte(1)
                                .and(Expr::col(Restaurants::CostRating).lte(5)),
                        ),
                )
                .col(
                    ColumnDef::new(Restaurants::IsApproved)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(ColumnDef::new(Restaurants::ApprovedAt).timestamp_with_time_zone())
                .col(
                    ColumnDef::new(Restaurants::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Restaurants::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_restaurants_manager")
                        .from(Restaurants::Table, Restaurants::ManagerId)
                        .to(RestaurantManagers::Table, RestaurantManagers::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_restaurants_manager")
                .table(Restaurants::Table)
                .col(Restaurants::ManagerId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(DiningTables::Table)
                .col(ColumnDef::new(DiningTables::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(DiningTables::RestaurantId).uuid().not_null())
                .col(ColumnDef::new(DiningTables::TableNumber).string_len(20).not_null())
                .col(
                    ColumnDef::new(DiningTables::Capacity)
                        .integer()
                        .not_null()
                        .check(Expr::col(DiningTables::Capacity).gt(0)),
                )
                .col(
                    ColumnDef::new(DiningTables::IsActive)
                        .boolean()
                        .not_null()
                        .default(true),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_dining_tables_restaurant")
                        .from(DiningTables::Table, DiningTables::RestaurantId)
                        .to(Restaurants::Table, Restaurants::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_dining_tables_restaurant")
                .table(DiningTables::Table)
                .col(DiningTables::RestaurantId)
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(OperatingHours::Table)
                .col(ColumnDef::new(OperatingHours::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(OperatingHours::RestaurantId).uuid().not_null())
                .col(ColumnDef::new(OperatingHours::DayOfWeek).string_len(16).not_null())
                .col(ColumnDef::new(OperatingHours::OpeningTime).time().not_null())
                .col(ColumnDef::new(OperatingHours::ClosingTime).time().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_operating_hours_restaurant")
                        .from(OperatingHours::Table, OperatingHours::RestaurantId)
                        .to(Restaurants::Table, Restaurants::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        // Backstop for the overlap check: two rows for the same day may never
        // share an opening time.
        m.create_index(
            Index::create()
                .name("idx_operating_hours_day_open")
                .table(OperatingHours::Table)
                .col(OperatingHours::RestaurantId)
                .col(OperatingHours::DayOfWeek)
                .col(OperatingHours::OpeningTime)
                .unique()
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(OperatingHours::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(
            Table::drop()
                .table(DiningTables::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(
            Table::drop()
                .table(Restaurants::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
