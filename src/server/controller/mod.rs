//! HTTP request handlers.
//!
//! Controllers check access through the guards in `middleware`, convert request DTOs
//! into operation parameters, call a service and convert the returned domain models
//! back into DTOs. Every handler carries a `utoipa::path` annotation so the OpenAPI
//! document is generated from the same code that serves the route.

pub mod appointment;
pub mod auth;
pub mod chatbot;
pub mod dental_service;
pub mod doctor;
pub mod health;
pub mod param;
pub mod user;
