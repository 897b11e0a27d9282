use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{
            AppointmentDto, AppointmentListDto, CreateAppointmentDto, UpdateAppointmentDto,
        },
    },
    server::{
        controller::param::AppointmentQueryParam,
        error::AppError,
        middleware::auth::AuthGuard,
        model::appointment::{CreateAppointmentParam, UpdateAppointmentParam},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

pub static APPOINTMENT_TAG: &str = "appointment";

#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked, linked to the caller when logged in", body = AppointmentDto),
        (status = 400, description = "Invalid booking or unknown doctor/service", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let patient_id = AuthGuard::new(&state.db, &session)
        .current_user_or_guest()
        .await?
        .map(|user| user.id);

    let details = AppointmentService::new(&state.db)
        .create(CreateAppointmentParam::from_dto(payload, patient_id)?)
        .await?;

    Ok((StatusCode::CREATED, Json(details.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    params(AppointmentQueryParam),
    responses(
        (status = 200, description = "Appointments the caller may access, soonest first", body = AppointmentListDto),
        (status = 400, description = "Unknown status or type filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Caller's account no longer exists", body = ErrorDto),
        (status = 503, description = "Profile store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AppointmentQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointments: Vec<AppointmentDto> = AppointmentService::new(&state.db)
        .list(&user.identity(), query.into_filter()?)
        .await?
        .into_iter()
        .map(|details| details.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(AppointmentListDto {
            count: appointments.len(),
            appointments,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "The appointment", body = AppointmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to view this appointment", body = ErrorDto),
        (status = 404, description = "Appointment or caller's account not found", body = ErrorDto),
        (status = 503, description = "Profile store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = AppointmentService::new(&state.db)
        .get(&user.identity(), id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentDto),
        (status = 400, description = "Invalid update or unknown doctor/service", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to update this appointment", body = ErrorDto),
        (status = 404, description = "Appointment or caller's account not found", body = ErrorDto),
        (status = 503, description = "Profile store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = AppointmentService::new(&state.db)
        .update(&user.identity(), UpdateAppointmentParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not authorized to delete this appointment", body = ErrorDto),
        (status = 404, description = "Appointment or caller's account not found", body = ErrorDto),
        (status = 503, description = "Profile store unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AppointmentService::new(&state.db)
        .delete(&user.identity(), id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
