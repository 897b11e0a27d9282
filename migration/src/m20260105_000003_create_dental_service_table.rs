use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DentalService::Table)
                    .if_not_exists()
                    .col(pk_auto(DentalService::Id))
                    .col(string_uniq(DentalService::Name))
                    .col(text_null(DentalService::Description))
                    .col(string(DentalService::Category).default("General"))
                    .col(integer(DentalService::Duration).default(30))
                    .col(double_null(DentalService::Price))
                    .col(boolean(DentalService::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(DentalService::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(DentalService::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DentalService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DentalService {
    Table,
    Id,
    Name,
    Description,
    Category,
    Duration,
    Price,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
