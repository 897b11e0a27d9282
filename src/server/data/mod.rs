//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod appointment;
pub mod dental_service;
pub mod doctor;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Maps a unique constraint violation to a 409 with `message`, passing other errors through.
pub(crate) fn conflict_on_unique(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => AppError::DbErr(err),
    }
}
