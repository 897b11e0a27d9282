use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User, m20260105_000002_create_doctor_table::Doctor,
    m20260105_000003_create_dental_service_table::DentalService,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer_null(Appointment::PatientId))
                    .col(integer(Appointment::DoctorId))
                    .col(integer_null(Appointment::ServiceId))
                    .col(date(Appointment::Date))
                    .col(string(Appointment::Time))
                    .col(string(Appointment::Status).default("pending"))
                    .col(string(Appointment::AppointmentType).default("regular"))
                    .col(string(Appointment::PatientName))
                    .col(string(Appointment::PatientPhone))
                    .col(integer_null(Appointment::PatientAge))
                    .col(string_null(Appointment::PatientGender))
                    .col(text_null(Appointment::Notes))
                    .col(string_null(Appointment::EmergencyType))
                    .col(text_null(Appointment::EmergencyDescription))
                    .col(
                        timestamp_with_time_zone(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Appointment::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient_id")
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_doctor_id")
                            .from(Appointment::Table, Appointment::DoctorId)
                            .to(Doctor::Table, Doctor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(DentalService::Table, DentalService::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_patient_id")
                    .table(Appointment::Table)
                    .col(Appointment::PatientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    PatientId,
    DoctorId,
    ServiceId,
    Date,
    Time,
    Status,
    AppointmentType,
    PatientName,
    PatientPhone,
    PatientAge,
    PatientGender,
    Notes,
    EmergencyType,
    EmergencyDescription,
    CreatedAt,
    UpdatedAt,
}
