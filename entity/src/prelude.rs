pub use super::appointment::Entity as Appointment;
pub use super::dental_service::Entity as DentalService;
pub use super::doctor::Entity as Doctor;
pub use super::user::Entity as User;
