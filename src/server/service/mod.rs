//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Access Decisions**: Resolving who may touch which appointment
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod appointment;
pub mod auth;
pub mod chatbot;
pub mod dental_service;
pub mod doctor;
pub mod ownership;
pub mod user;

#[cfg(test)]
mod test;
