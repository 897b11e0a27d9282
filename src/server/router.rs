//! Route table, OpenAPI document and HTTP layers.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{appointment, auth, chatbot, dental_service, doctor, health, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dental Clinic Booking API",
        description = "Accounts, doctors, treatments and appointment booking"
    ),
    tags(
        (name = "auth", description = "Registration, login and session"),
        (name = "user", description = "Account management"),
        (name = "doctor", description = "Doctor directory"),
        (name = "service", description = "Treatment catalog"),
        (name = "appointment", description = "Booking and managing appointments"),
        (name = "chatbot", description = "Help chatbot"),
        (name = "health", description = "Liveness check"),
    )
)]
struct ApiDoc;

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_me))
        .routes(routes!(user::create_user, user::get_users))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(user::get_user_appointments))
        .routes(routes!(doctor::get_doctors, doctor::create_doctor))
        .routes(routes!(
            doctor::get_doctor,
            doctor::update_doctor,
            doctor::delete_doctor
        ))
        .routes(routes!(
            dental_service::get_services,
            dental_service::create_service
        ))
        .routes(routes!(
            dental_service::get_service,
            dental_service::update_service,
            dental_service::delete_service
        ))
        .routes(routes!(
            appointment::get_appointments,
            appointment::create_appointment
        ))
        .routes(routes!(
            appointment::get_appointment,
            appointment::update_appointment,
            appointment::delete_appointment
        ))
        .routes(routes!(chatbot::ask_chatbot))
        .routes(routes!(health::health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
