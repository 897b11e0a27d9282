//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names, e-mails and phone numbers in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a doctor, a service and a patient, then books a linked appointment for the
/// patient with both.
///
/// # Returns
/// - `Ok((patient, doctor, service, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_linked_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::doctor::Model,
        entity::dental_service::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let patient = crate::factory::user::create_user(db).await?;
    let doctor = crate::factory::doctor::create_doctor(db).await?;
    let service = crate::factory::dental_service::create_dental_service(db).await?;
    let appointment = crate::factory::appointment::AppointmentFactory::new(db, doctor.id)
        .patient(patient.id)
        .service(service.id)
        .patient_name(patient.name.clone())
        .build()
        .await?;

    Ok((patient, doctor, service, appointment))
}
