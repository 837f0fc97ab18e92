use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    AuthHash,
    PhoneNumber,
    FirstName,
    LastName,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    UserId,
    NotificationPreference,
}

#[derive(DeriveIden)]
enum RestaurantManagers {
    Table,
    Id,
    UserId,
    ApprovedAt,
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Users::Table)
                .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Users::Email).string_len(100).not_null())
                .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                .col(ColumnDef::new(Users::AuthHash).string_len(255).not_null())
                .col(ColumnDef::new(Users::PhoneNumber).string_len(20))
                .col(ColumnDef::new(Users::FirstName).string_len(50).not_null())
                .col(ColumnDef::new(Users::LastName).string_len(50).not_null())
                .col(ColumnDef::new(Users::Role).string_len(32).not_null())
                .col(
                    ColumnDef::new(Users::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Users::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_users_email")
                .table(Users::Table)
                .col(Users::Email)
                .unique()
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Customers::Table)
                .col(ColumnDef::new(Customers::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Customers::UserId).uuid().not_null().unique_key())
                .col(
                    ColumnDef::new(Customers::NotificationPreference)
                        .string_len(16)
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_customers_user")
                        .from(Customers::Table, Customers::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(RestaurantManagers::Table)
                .col(
                    ColumnDef::new(RestaurantManagers::Id)
                        .uuid()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(RestaurantManagers::UserId)
                        .uuid()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(RestaurantManagers::ApprovedAt).timestamp_with_time_zone())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_restaurant_managers_user")
                        .from(RestaurantManagers::Table, RestaurantManagers::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        m.create_table(
            Table::create()
                .table(Admins::Table)
                .col(ColumnDef::new(Admins::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Admins::UserId).uuid().not_null().unique_key())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_admins_user")
                        .from(Admins::Table, Admins::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Admins::Table).if_exists().to_owned())
            .await?;
        m.drop_table(
            Table::drop()
                .table(RestaurantManagers::Table)
                .if_exists()
                .to_owned(),
        )
        .await?;
        m.drop_table(Table::drop().table(Customers::Table).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
