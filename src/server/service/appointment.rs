//! Appointment service for business logic.
//!
//! Orchestrates booking, listing, viewing, updating and deleting appointments. Every
//! operation on an existing appointment first checks that it exists (404) and then
//! applies the ownership rules through [`AppointmentGuard`]. Listings for patients are
//! filtered with the same rules so that a patient sees exactly the appointments they
//! could open individually.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, dental_service::DentalServiceRepository,
        doctor::DoctorRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        appointment::{
            Appointment, AppointmentDetails, AppointmentFilter, CreateAppointmentParam,
            UpdateAppointmentParam,
        },
        auth::{Identity, Profile},
        dental_service::DentalService,
        doctor::Doctor,
    },
    service::ownership::{
        match_guest, resolve_without_profile, AppointmentGuard, OwnershipDecision,
        OwnershipResolver,
    },
};

const APPOINTMENT_NOT_FOUND: &str = "Appointment not found";

/// Service providing business logic for appointments.
pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    /// Creates a new AppointmentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an appointment.
    ///
    /// The booking is linked to `param.patient_id` when the caller is logged in and is a
    /// guest booking otherwise.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetails)` - The new appointment with doctor and service
    /// - `Err(AppError::BadRequest)` - The doctor or service does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateAppointmentParam) -> Result<AppointmentDetails, AppError> {
        let doctor = self.require_doctor(param.doctor_id).await?;
        let service = match param.service_id {
            Some(service_id) => Some(self.require_service(service_id).await?),
            None => None,
        };

        let appointment = AppointmentRepository::new(self.db).create(param).await?;

        tracing::info!(
            appointment_id = appointment.id,
            doctor_id = appointment.doctor_id,
            linked = appointment.patient_id.is_some(),
            "Appointment booked"
        );

        Ok(AppointmentDetails {
            appointment,
            doctor: Some(doctor),
            service,
        })
    }

    /// Lists the appointments matching `filter` that `identity` may access.
    ///
    /// Admins receive every match. For patients each appointment is decided with the
    /// ownership rules; the caller's profile is read at most once for the whole listing.
    ///
    /// # Returns
    /// - `Ok(Vec<AppointmentDetails>)` - Accessible appointments, soonest first
    /// - `Err(AuthError::UserNotInDatabase)` - Guest matching needed but the caller's
    ///   profile no longer exists
    /// - `Err(AppError::Unavailable)` - The profile store could not be read
    pub async fn list(
        &self,
        identity: &Identity,
        filter: AppointmentFilter,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        let appointments = AppointmentRepository::new(self.db).get_all(filter).await?;

        let visible = if identity.is_admin() {
            appointments
        } else {
            self.visible_to(identity, appointments).await?
        };

        self.with_details(visible).await
    }

    /// Gets a single appointment the caller may view.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetails)` - The appointment
    /// - `Err(AppError::NotFound)` - No appointment with that id
    /// - `Err(AuthError::AccessDenied)` - The appointment is not the caller's
    pub async fn get(&self, identity: &Identity, id: i32) -> Result<AppointmentDetails, AppError> {
        let appointment = self.require_appointment(id).await?;

        let users = UserRepository::new(self.db);
        AppointmentGuard::new(&users)
            .authorize_view(identity, &appointment.ownership())
            .await?;

        self.details(appointment).await
    }

    /// Updates an appointment the caller may update.
    ///
    /// # Returns
    /// - `Ok(AppointmentDetails)` - The updated appointment
    /// - `Err(AppError::NotFound)` - No appointment with that id
    /// - `Err(AuthError::AccessDenied)` - The appointment is not the caller's
    /// - `Err(AppError::BadRequest)` - A new doctor or service does not exist
    pub async fn update(
        &self,
        identity: &Identity,
        param: UpdateAppointmentParam,
    ) -> Result<AppointmentDetails, AppError> {
        let appointment = self.require_appointment(param.id).await?;

        let users = UserRepository::new(self.db);
        AppointmentGuard::new(&users)
            .authorize_update(identity, &appointment.ownership())
            .await?;

        if let Some(doctor_id) = param.doctor_id {
            self.require_doctor(doctor_id).await?;
        }
        if let Some(service_id) = param.service_id {
            self.require_service(service_id).await?;
        }

        let Some(updated) = AppointmentRepository::new(self.db).update(param).await? else {
            return Err(AppError::NotFound(APPOINTMENT_NOT_FOUND.to_string()));
        };

        self.details(updated).await
    }

    /// Deletes an appointment the caller may delete.
    ///
    /// # Returns
    /// - `Ok(())` - The appointment was deleted
    /// - `Err(AppError::NotFound)` - No appointment with that id
    /// - `Err(AuthError::AccessDenied)` - The appointment is not the caller's
    pub async fn delete(&self, identity: &Identity, id: i32) -> Result<(), AppError> {
        let appointment = self.require_appointment(id).await?;

        let users = UserRepository::new(self.db);
        AppointmentGuard::new(&users)
            .authorize_delete(identity, &appointment.ownership())
            .await?;

        if !AppointmentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(APPOINTMENT_NOT_FOUND.to_string()));
        }

        tracing::info!(appointment_id = id, user_id = identity.id, "Appointment deleted");

        Ok(())
    }

    /// Gets the appointments explicitly linked to an account, newest first.
    pub async fn linked_to_patient(&self, patient_id: i32) -> Result<Vec<AppointmentDetails>, AppError> {
        let appointments = AppointmentRepository::new(self.db)
            .get_linked_to_patient(patient_id)
            .await?;

        self.with_details(appointments).await
    }

    /// Keeps the appointments a non-admin caller may access.
    async fn visible_to(
        &self,
        identity: &Identity,
        appointments: Vec<Appointment>,
    ) -> Result<Vec<Appointment>, AppError> {
        let users = UserRepository::new(self.db);
        let resolver = OwnershipResolver::new(&users);
        let mut profile: Option<Option<Profile>> = None;
        let mut visible = Vec::with_capacity(appointments.len());

        for appointment in appointments {
            let ownership = appointment.ownership();

            let decision = match resolve_without_profile(identity, &ownership) {
                Some(decision) => decision,
                None => {
                    if profile.is_none() {
                        profile = Some(resolver.load_profile(identity).await?);
                    }
                    match profile.as_ref().and_then(Option::as_ref) {
                        Some(profile) => match_guest(profile, &ownership),
                        None => return Err(AuthError::UserNotInDatabase(identity.id).into()),
                    }
                }
            };

            if decision == OwnershipDecision::Allow {
                visible.push(appointment);
            }
        }

        Ok(visible)
    }

    async fn require_appointment(&self, id: i32) -> Result<Appointment, AppError> {
        AppointmentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(APPOINTMENT_NOT_FOUND.to_string()))
    }

    async fn require_doctor(&self, id: i32) -> Result<Doctor, AppError> {
        DoctorRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Doctor {} does not exist", id)))
    }

    async fn require_service(&self, id: i32) -> Result<DentalService, AppError> {
        DentalServiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Service {} does not exist", id)))
    }

    async fn details(&self, appointment: Appointment) -> Result<AppointmentDetails, AppError> {
        let mut details = self.with_details(vec![appointment]).await?;

        details
            .pop()
            .ok_or_else(|| AppError::InternalError("Appointment details lost".to_string()))
    }

    /// Attaches doctor and service summaries, loading each referenced row once.
    async fn with_details(
        &self,
        appointments: Vec<Appointment>,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        let mut doctor_ids: Vec<i32> = appointments.iter().map(|a| a.doctor_id).collect();
        doctor_ids.sort_unstable();
        doctor_ids.dedup();

        let mut service_ids: Vec<i32> = appointments.iter().filter_map(|a| a.service_id).collect();
        service_ids.sort_unstable();
        service_ids.dedup();

        let doctors: HashMap<i32, Doctor> = DoctorRepository::new(self.db)
            .find_by_ids(doctor_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        let services: HashMap<i32, DentalService> = DentalServiceRepository::new(self.db)
            .find_by_ids(service_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(appointments
            .into_iter()
            .map(|appointment| AppointmentDetails {
                doctor: doctors.get(&appointment.doctor_id).cloned(),
                service: appointment
                    .service_id
                    .and_then(|id| services.get(&id).cloned()),
                appointment,
            })
            .collect())
    }
}
