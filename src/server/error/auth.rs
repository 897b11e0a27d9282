use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request requires a logged-in user. Results in 401 Unauthorized.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session or identity references a user that no longer exists.
    ///
    /// This is an integrity fault of the caller's identity rather than an ownership
    /// failure. Results in 404 Not Found with "User not found".
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// User is authenticated but not allowed to perform the action.
    ///
    /// The message is returned to the client as-is and must not describe which
    /// check failed. Results in 403 Forbidden.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// E-mail unknown or password mismatch during login.
    ///
    /// Both cases share one message so the response does not reveal which accounts
    /// exist. Results in 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Admin code supplied at registration did not match the active code.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden with the call site's generic message
/// - `InvalidAdminCode` → 400 Bad Request
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, error) = match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                "You must be logged in to access this resource".to_string(),
            ),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::AccessDenied(_, message) => (StatusCode::FORBIDDEN, message),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::InvalidAdminCode => (
                StatusCode::BAD_REQUEST,
                "Invalid or expired admin code".to_string(),
            ),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
