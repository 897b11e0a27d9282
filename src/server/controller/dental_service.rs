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
        dental_service::{
            CreateDentalServiceDto, DentalServiceDto, DentalServiceListDto, UpdateDentalServiceDto,
        },
    },
    server::{
        controller::param::DentalServiceQueryParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::dental_service::{CreateDentalServiceParam, UpdateDentalServiceParam},
        service::dental_service::DentalServiceService,
        state::AppState,
    },
};

pub static DENTAL_SERVICE_TAG: &str = "service";

#[utoipa::path(
    get,
    path = "/api/services",
    tag = DENTAL_SERVICE_TAG,
    params(DentalServiceQueryParam),
    responses(
        (status = 200, description = "Services ordered by name", body = DentalServiceListDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Query(query): Query<DentalServiceQueryParam>,
) -> Result<impl IntoResponse, AppError> {
    let services: Vec<DentalServiceDto> = DentalServiceService::new(&state.db)
        .get_all(query.into_filter()?)
        .await?
        .into_iter()
        .map(|service| service.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(DentalServiceListDto {
            count: services.len(),
            services,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = DENTAL_SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "The service", body = DentalServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DentalServiceService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/services",
    tag = DENTAL_SERVICE_TAG,
    request_body = CreateDentalServiceDto,
    responses(
        (status = 201, description = "Service created", body = DentalServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 409, description = "Service name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDentalServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = DentalServiceService::new(&state.db)
        .create(CreateDentalServiceParam::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = DENTAL_SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateDentalServiceDto,
    responses(
        (status = 200, description = "Service updated", body = DentalServiceDto),
        (status = 400, description = "Invalid service data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 409, description = "Service name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDentalServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = DentalServiceService::new(&state.db)
        .update(UpdateDentalServiceParam::from_dto(id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = DENTAL_SERVICE_TAG,
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    DentalServiceService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
