//! SeaORM entities for the clinic booking database.

pub mod prelude;

pub mod appointment;
pub mod dental_service;
pub mod doctor;
pub mod user;
