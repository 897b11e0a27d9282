use std::sync::atomic::{AtomicUsize, Ordering};

use crate::server::{
    error::AppError,
    model::{
        appointment::AppointmentOwnership,
        auth::{Identity, Profile},
        user::Role,
    },
    service::ownership::{OwnershipDecision, OwnershipResolver, ProfileLookup},
};

mod authorize;
mod guest;
mod linked;

/// In-memory profile store that counts reads.
struct StubProfiles {
    profile: Option<Profile>,
    fail: bool,
    reads: AtomicUsize,
}

impl StubProfiles {
    fn with(phone: Option<&str>, name: Option<&str>) -> Self {
        Self {
            profile: Some(Profile {
                phone: phone.map(str::to_string),
                name: name.map(str::to_string),
            }),
            fail: false,
            reads: AtomicUsize::new(0),
        }
    }

    fn missing() -> Self {
        Self {
            profile: None,
            fail: false,
            reads: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            profile: None,
            fail: true,
            reads: AtomicUsize::new(0),
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ProfileLookup for StubProfiles {
    async fn lookup_profile(&self, _user_id: i32) -> Result<Option<Profile>, AppError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::InternalError("connection refused".to_string()));
        }
        Ok(self.profile.clone())
    }
}

fn patient(id: i32) -> Identity {
    Identity {
        id,
        role: Role::Patient,
        phone: None,
        name: None,
    }
}

fn admin(id: i32) -> Identity {
    Identity {
        id,
        role: Role::Admin,
        phone: None,
        name: None,
    }
}

fn guest(name: &str, phone: &str) -> AppointmentOwnership {
    AppointmentOwnership {
        linked_patient_id: None,
        patient_name: name.to_string(),
        patient_phone: phone.to_string(),
    }
}

fn linked(patient_id: i32, name: &str, phone: &str) -> AppointmentOwnership {
    AppointmentOwnership {
        linked_patient_id: Some(patient_id),
        ..guest(name, phone)
    }
}
