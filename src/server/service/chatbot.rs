//! Rule based help chatbot.
//!
//! Answers a handful of fixed topics by keyword. Each session may ask a limited number
//! of questions; the count is kept in the session store.

use std::sync::Arc;

use tokio::sync::Mutex;
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::ChatSession};

/// Questions allowed per session.
pub const MAX_QUESTIONS: u32 = 5;

/// A canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: &'static str,
    pub link: Option<&'static str>,
}

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
    link: Option<&'static str>,
}

const RULES: &[Rule] = &[
    Rule {
        keywords: &["book"],
        reply: "You can book an appointment on our booking page.",
        link: Some("/booking"),
    },
    Rule {
        keywords: &["service"],
        reply: "We offer whitening, implants, braces, root canals and more.",
        link: Some("/services"),
    },
    Rule {
        keywords: &["emergency"],
        reply: "Emergency dental care is available.",
        link: Some("/emergency"),
    },
    Rule {
        keywords: &["hours", "open"],
        reply: "Our clinic hours: Sat-Thu 9am - 9pm, Friday closed.",
        link: None,
    },
];

const FALLBACK: &str = "I can answer only these questions right now: book an appointment, \
     services offered, emergency care, and clinic hours.";

/// Picks the answer for a message. The first rule with a matching keyword wins.
pub fn reply_for(message: &str) -> ChatReply {
    let normalized = message.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| normalized.contains(k)))
        .map(|rule| ChatReply {
            reply: rule.reply,
            link: rule.link,
        })
        .unwrap_or(ChatReply {
            reply: FALLBACK,
            link: None,
        })
}

/// Serializes quota checks so that concurrent requests cannot both take the last
/// question of a session.
///
/// Cloning shares the same lock, so the instance in `AppState` covers every request.
#[derive(Clone, Default)]
pub struct ChatQuota {
    lock: Arc<Mutex<()>>,
}

pub struct ChatbotService<'a> {
    session: ChatSession<'a>,
    quota: &'a ChatQuota,
}

impl<'a> ChatbotService<'a> {
    pub fn new(session: &'a Session, quota: &'a ChatQuota) -> Self {
        Self {
            session: ChatSession::new(session),
            quota,
        }
    }

    /// Answers a question and counts it against the session quota.
    ///
    /// Blank messages are rejected without using up a question.
    ///
    /// # Returns
    /// - `Ok((ChatReply, remaining))` - The answer and questions left in this session
    /// - `Err(AppError::BadRequest)` - The message is blank
    /// - `Err(AppError::TooManyRequests)` - The session has used all its questions
    pub async fn ask(&self, message: &str) -> Result<(ChatReply, u32), AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }

        let _quota = self.quota.lock.lock().await;

        if self.session.questions_asked().await? >= MAX_QUESTIONS {
            return Err(AppError::TooManyRequests(format!(
                "You've reached the limit of {} questions for this chat. Feel free to call us for more help!",
                MAX_QUESTIONS
            )));
        }

        let asked = self.session.record_question().await?;

        Ok((reply_for(message), MAX_QUESTIONS.saturating_sub(asked)))
    }
}
