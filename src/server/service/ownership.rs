//! Appointment ownership resolution.
//!
//! Decides whether an authenticated caller may access an appointment. The decision is
//! tiered and the first matching tier wins:
//!
//! 1. Admins may access every appointment.
//! 2. An appointment linked to an account belongs to that account only. The caller's
//!    contact details are never consulted for linked appointments.
//! 3. A guest appointment belongs to the caller when the caller's stored profile matches
//!    the phone number *or* the name entered at booking time, compared in normalized form.
//!
//! Resolution never mutates the identity or the appointment, and reads the profile store
//! at most once per decision. [`AppointmentGuard`] maps decisions to 403/404/503 errors
//! for the single-appointment operations.

use std::future::Future;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        appointment::AppointmentOwnership,
        auth::{Identity, Profile},
    },
    util::normalize::{matches_normalized, normalize_name, normalize_phone},
};

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipDecision {
    Allow,
    /// The caller is known but the appointment is not theirs.
    DenyNotOwner,
    /// A guest appointment had to be matched but the caller has no stored profile.
    DenyIdentityUnresolvable,
}

/// Read access to account profiles by account id.
pub trait ProfileLookup {
    /// Fetches the contact details of an account.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The account exists
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError)` - The store could not be queried
    fn lookup_profile(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Option<Profile>, AppError>> + Send;
}

/// Resolves appointment access decisions against a profile store.
pub struct OwnershipResolver<'a, L> {
    profiles: &'a L,
}

impl<'a, L: ProfileLookup + Sync> OwnershipResolver<'a, L> {
    pub fn new(profiles: &'a L) -> Self {
        Self { profiles }
    }

    /// Decides whether `identity` may access `appointment`.
    ///
    /// The profile store is only read for guest appointments requested by non-admins.
    ///
    /// # Arguments
    /// - `identity` - The authenticated caller
    /// - `appointment` - Ownership fields of the appointment being accessed
    ///
    /// # Returns
    /// - `Ok(OwnershipDecision)` - The decision
    /// - `Err(AppError::Unavailable)` - The profile store could not be read
    pub async fn resolve_access(
        &self,
        identity: &Identity,
        appointment: &AppointmentOwnership,
    ) -> Result<OwnershipDecision, AppError> {
        if let Some(decision) = resolve_without_profile(identity, appointment) {
            return Ok(decision);
        }

        let Some(profile) = self.load_profile(identity).await? else {
            return Ok(OwnershipDecision::DenyIdentityUnresolvable);
        };

        Ok(match_guest(&profile, appointment))
    }

    /// Loads the caller's profile for guest matching, at most once per call.
    ///
    /// Used by listings to decide many appointments with a single store read.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The caller's stored contact details
    /// - `Ok(None)` - The caller's account no longer exists
    /// - `Err(AppError::Unavailable)` - The profile store could not be read
    pub async fn load_profile(&self, identity: &Identity) -> Result<Option<Profile>, AppError> {
        self.profiles
            .lookup_profile(identity.id)
            .await
            .map_err(|e| AppError::Unavailable(format!("Profile lookup failed: {}", e)))
    }
}

/// Decides the tiers that do not need the profile store.
///
/// # Returns
/// - `Some(OwnershipDecision)` - Admin bypass or a linked appointment
/// - `None` - Guest appointment requested by a non-admin, the profile must be consulted
pub fn resolve_without_profile(
    identity: &Identity,
    appointment: &AppointmentOwnership,
) -> Option<OwnershipDecision> {
    if identity.is_admin() {
        return Some(OwnershipDecision::Allow);
    }

    appointment.linked_patient_id.map(|patient_id| {
        if patient_id == identity.id {
            OwnershipDecision::Allow
        } else {
            OwnershipDecision::DenyNotOwner
        }
    })
}

/// Matches a guest appointment against the caller's stored profile.
///
/// Either a normalized phone match or a normalized name match is sufficient. Empty
/// normalized values never match.
pub fn match_guest(profile: &Profile, appointment: &AppointmentOwnership) -> OwnershipDecision {
    let phone_match = matches_normalized(
        normalize_phone,
        profile.phone.as_deref(),
        Some(&appointment.patient_phone),
    );
    let name_match = matches_normalized(
        normalize_name,
        profile.name.as_deref(),
        Some(&appointment.patient_name),
    );

    if phone_match || name_match {
        OwnershipDecision::Allow
    } else {
        OwnershipDecision::DenyNotOwner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppointmentAction {
    View,
    Update,
    Delete,
}

impl AppointmentAction {
    fn denied_message(self) -> &'static str {
        match self {
            AppointmentAction::View => "Not authorized to view this appointment",
            AppointmentAction::Update => "Not authorized to update this appointment",
            AppointmentAction::Delete => "Not authorized to delete this appointment",
        }
    }
}

/// Turns ownership decisions into request outcomes for the view, update and delete
/// operations. All three apply the same tiers and differ only in the message returned
/// to a caller who does not own the appointment.
pub struct AppointmentGuard<'a, L> {
    resolver: OwnershipResolver<'a, L>,
}

impl<'a, L: ProfileLookup + Sync> AppointmentGuard<'a, L> {
    /// Creates a guard resolving guest ownership against `profiles`.
    pub fn new(profiles: &'a L) -> Self {
        Self {
            resolver: OwnershipResolver::new(profiles),
        }
    }

    /// Requires that `identity` may view the appointment.
    ///
    /// # Returns
    /// - `Ok(())` - Access allowed
    /// - `Err(AuthError::AccessDenied)` - 403, the appointment is not the caller's
    /// - `Err(AuthError::UserNotInDatabase)` - 404, the caller's profile no longer exists
    /// - `Err(AppError::Unavailable)` - 503, the profile store could not be read
    pub async fn authorize_view(
        &self,
        identity: &Identity,
        appointment: &AppointmentOwnership,
    ) -> Result<(), AppError> {
        self.authorize(identity, appointment, AppointmentAction::View)
            .await
    }

    /// Requires that `identity` may update the appointment. See [`Self::authorize_view`].
    pub async fn authorize_update(
        &self,
        identity: &Identity,
        appointment: &AppointmentOwnership,
    ) -> Result<(), AppError> {
        self.authorize(identity, appointment, AppointmentAction::Update)
            .await
    }

    /// Requires that `identity` may delete the appointment. See [`Self::authorize_view`].
    pub async fn authorize_delete(
        &self,
        identity: &Identity,
        appointment: &AppointmentOwnership,
    ) -> Result<(), AppError> {
        self.authorize(identity, appointment, AppointmentAction::Delete)
            .await
    }

    async fn authorize(
        &self,
        identity: &Identity,
        appointment: &AppointmentOwnership,
        action: AppointmentAction,
    ) -> Result<(), AppError> {
        match self.resolver.resolve_access(identity, appointment).await? {
            OwnershipDecision::Allow => Ok(()),
            OwnershipDecision::DenyNotOwner => {
                tracing::debug!(
                    user_id = identity.id,
                    ?action,
                    linked = appointment.linked_patient_id.is_some(),
                    "Appointment access denied, caller is not the owner"
                );
                Err(AuthError::AccessDenied(identity.id, action.denied_message().to_string()).into())
            }
            OwnershipDecision::DenyIdentityUnresolvable => {
                tracing::debug!(
                    user_id = identity.id,
                    ?action,
                    "Appointment access denied, caller has no stored profile"
                );
                Err(AuthError::UserNotInDatabase(identity.id).into())
            }
        }
    }
}
