use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }),
    )
}
