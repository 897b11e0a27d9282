use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctor::Table)
                    .if_not_exists()
                    .col(pk_auto(Doctor::Id))
                    .col(string(Doctor::Name))
                    .col(string(Doctor::Specialty))
                    .col(string(Doctor::Image).default(""))
                    .col(text(Doctor::AvailableTimes).default("[]"))
                    .col(text_null(Doctor::Bio))
                    .col(boolean(Doctor::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Doctor::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Doctor::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Doctor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Doctor {
    Table,
    Id,
    Name,
    Specialty,
    Image,
    AvailableTimes,
    Bio,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
