use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        chatbot::{ChatMessageDto, ChatReplyDto},
    },
    server::{error::AppError, service::chatbot::ChatbotService, state::AppState},
};

pub static CHATBOT_TAG: &str = "chatbot";

#[utoipa::path(
    post,
    path = "/api/chatbot",
    tag = CHATBOT_TAG,
    request_body = ChatMessageDto,
    responses(
        (status = 200, description = "Canned answer for the question", body = ChatReplyDto),
        (status = 400, description = "Blank message", body = ErrorDto),
        (status = 429, description = "Question limit reached for this session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ask_chatbot(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChatMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let (reply, remaining) = ChatbotService::new(&session, &state.chat_quota)
        .ask(&payload.message)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ChatReplyDto {
            reply: reply.reply.to_string(),
            link: reply.link.map(str::to_string),
            remaining,
        }),
    ))
}
