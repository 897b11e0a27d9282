//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::{admin::code::AdminCodeService, chatbot::ChatQuota};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: `DatabaseConnection` is a connection pool, the
/// other two keep their state behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// One-time admin code checked during registration.
    pub admin_code_service: AdminCodeService,

    /// Lock serializing chatbot quota checks.
    pub chat_quota: ChatQuota,
}

impl AppState {
    pub fn new(db: DatabaseConnection, admin_code_service: AdminCodeService) -> Self {
        Self {
            db,
            admin_code_service,
            chat_quota: ChatQuota::default(),
        }
    }
}
