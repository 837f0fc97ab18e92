use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Restaurants {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum DiningTables {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ReservationSlots {
    Table,
    Id,
    RestaurantId,
    SlotTime,
    AvailableTables,
    IsActive,
}

#[derive(DeriveIden)]
enum Reservations {
    Table,
    Id,
    CustomerId,
    RestaurantId,
    TableId,
    ReservationTime,
    PartySize,
    Status,
    ConfirmationCode,
    SpecialRequests,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(ReservationSlots::Table)
                .col(
                    ColumnDef::new(ReservationSlots::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(ReservationSlots::RestaurantId).uuid().not_null())
                .col(
                    ColumnDef::new(ReservationSlots::SlotTime)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    // CHECK keeps concurrent decrements from overselling.
                    ColumnDef::new(ReservationSlots::AvailableTables)
                        .integer()
                        .not_null()
                        .check(Expr::col(ReservationSlots::AvailableTables).gte(0)),
                )
                .col(
                    ColumnDef::new(ReservationSlots::IsActive)
                        .boolean()
                        .not_null()
                        .default(true),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reservation_slots_restaurant")
                        .from(ReservationSlots::Table, ReservationSlots::RestaurantId)
                        .to(Restaurants::Table, Restaurants::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_reservation_slots_restaurant_time")
                .table(ReservationSlots::Table)
                .col(ReservationSlots::RestaurantId)
                .col(ReservationSlots::SlotTime)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Reservations::Table)
                .col(ColumnDef::new(Reservations::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Reservations::CustomerId).uuid().not_null())
                .col(ColumnDef::new(Reservations::RestaurantId).uuid().not_null())
                .col(ColumnDef::new(Reservations::TableId).uuid().not_null())
                .col(
                    ColumnDef::new(Reservations::ReservationTime)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Reservations::PartySize)
                        .integer()
                        .not_null()
                        .check(Expr::col(Reservations::PartySize).gt(0)),
                )
                .col(ColumnDef::new(Reservations::Status).string_len(16).not_null())
                .col(
                    ColumnDef::new(Reservations::ConfirmationCode)
                        .string_len(16)
                        .not_null(),
                )
                .col(ColumnDef::new(Reservations::SpecialRequests).text())
                .col(
                    ColumnDef::new(Reservations::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Reservations::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reservations_customer")
                        .from(Reservations::Table, Reservations::CustomerId)
                        .to(Customers::Table, Customers::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reservations_restaurant")
                        .from(Reservations::Table, Reservations::RestaurantId)
                        .to(Restaurants::Table, Restaurants::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_reservations_table")
                        .from(Reservations::Table, Reservations::TableId)
                        .to(DiningTables::Table, DiningTables::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_reservations_code")
                .table(Reservations::Table)
                .col(Reservations::ConfirmationCode)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_reservations_customer")
                .table(Reservations::Table)
                .col(Reservations::CustomerId)
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_reservations_restaurant")
                .table(Reservations::Table)
                .col(Reservations::RestaurantId)
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(Reservations::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(
            Table::drop()
                .table(ReservationSlots::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        Ok(())
    }
}
