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
        doctor::{CreateDoctorDto, DoctorDto, DoctorListDto, UpdateDoctorDto},
    },
    server::{
        controller::param::DoctorQueryParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::doctor::{CreateDoctorParam, UpdateDoctorParam},
        service::doctor::DoctorService,
        state::AppState,
    },
};

pub static DOCTOR_TAG: &str = "doctor";

#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    params(DoctorQueryParam),
    responses(
        (status = 200, description = "Doctors ordered by name", body = DoctorListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctors(
    State(state): State<AppState>,
    Query(query): Query<DoctorQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let doctors: Vec<DoctorDto> = DoctorService::new(&state.db)
        .get_all(query.into_filter())
        .await?
        .into_iter()
        .map(|doctor| doctor.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(DoctorListDto {
            count: doctors.len(),
            doctors,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "The doctor", body = DoctorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = DoctorService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(doctor.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    request_body = CreateDoctorDto,
    responses(
        (status = 201, description = "Doctor created", body = DoctorDto),
        (status = 400, description = "Invalid doctor data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let doctor = DoctorService::new(&state.db)
        .create(CreateDoctorParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(doctor.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    request_body = UpdateDoctorDto,
    responses(
        (status = 200, description = "Doctor updated", body = DoctorDto),
        (status = 400, description = "Invalid doctor data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let doctor = DoctorService::new(&state.db)
        .update(UpdateDoctorParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(doctor.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/doctors/{id}",
    tag = DOCTOR_TAG,
    params(
        ("id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 204, description = "Doctor and their appointments deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    DoctorService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
