//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and `create_*` convenience
//! functions for quick default creation. Foreign keys are enforced by SQLite, so create
//! doctors (and services) before the appointments that reference them.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let patient = factory::user::UserFactory::new(&db)
//!     .name("Jane Doe")
//!     .phone("0123456789")
//!     .build()
//!     .await?;
//! let doctor = factory::create_doctor(&db).await?;
//! let booking = factory::appointment::AppointmentFactory::new(&db, doctor.id)
//!     .patient_phone("(012) 345-6789")
//!     .build()
//!     .await?;
//! ```

pub mod appointment;
pub mod dental_service;
pub mod doctor;
pub mod helpers;
pub mod user;

pub use appointment::{create_guest_appointment, create_linked_appointment};
pub use dental_service::create_dental_service;
pub use doctor::create_doctor;
pub use user::{create_admin, create_user};
