//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types are the JSON contract of the API. Server-side domain models convert into
//! them at the controller boundary, and request payloads are converted into operation
//! parameters (with validation) before reaching the service layer.

pub mod api;
pub mod appointment;
pub mod auth;
pub mod chatbot;
pub mod dental_service;
pub mod doctor;
pub mod user;
