//! Clinic Booking Test Utils
//!
//! Shared testing utilities for the clinic booking backend. Provides a builder for test
//! contexts backed by in-memory SQLite databases, an optional session bound to the same
//! database, and factories for inserting accounts, doctors, services and appointments.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_for_guest() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let doctor = factory::create_doctor(db).await?;
//!     let appointment = factory::create_guest_appointment(db, doctor.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
