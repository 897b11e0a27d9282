use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ChatMessageDto {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ChatReplyDto {
    pub reply: String,
    pub link: Option<String>,
    /// Questions left in this session.
    pub remaining: u32,
}
