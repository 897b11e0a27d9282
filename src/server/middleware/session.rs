//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys relevant to
//! its concern:
//! - `AuthSession` - The logged in account id
//! - `ChatSession` - Number of chatbot questions asked in this session

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_CHAT_QUESTIONS: &str = "chat:questions";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account id after a successful login or registration.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - User id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write the session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged in account id.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Ends the session, removing all stored data.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// Chatbot quota tracking.
pub struct ChatSession<'a> {
    session: &'a Session,
}

impl<'a> ChatSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Number of questions answered so far in this session.
    pub async fn questions_asked(&self) -> Result<u32, AppError> {
        Ok(self
            .session
            .get::<u32>(SESSION_CHAT_QUESTIONS)
            .await?
            .unwrap_or(0))
    }

    /// Records one more answered question and returns the new total.
    ///
    /// The session is written to the store immediately so the next request on this
    /// session sees the new count.
    pub async fn record_question(&self) -> Result<u32, AppError> {
        let asked = self.questions_asked().await?.saturating_add(1);
        self.session.insert(SESSION_CHAT_QUESTIONS, asked).await?;
        self.session.save().await?;
        Ok(asked)
    }
}
