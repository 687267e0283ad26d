use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        registration::{CreateRegistrationDto, RegistrationDto, UpdateRegistrationDto},
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath},
        model::registration::{
            CreateRegistrationParam, Registration, UpdateRegistrationParam,
        },
        service::registration::RegistrationService,
        state::AppState,
    },
};

/// Tag for grouping registration endpoints in OpenAPI documentation
pub static REGISTRATION_TAG: &str = "registration";

fn into_dtos(registrations: Vec<Registration>) -> Vec<RegistrationDto> {
    registrations
        .into_iter()
        .map(|registration| registration.into_dto())
        .collect()
}

/// Register a scout for an event.
///
/// The registration date is set by the server and the status defaults to `PENDING`.
/// A scout can be registered for an event only once.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Scout id, event id, note, optional status and account id
///
/// # Returns
/// - `201 Created` - Successfully created registration
/// - `400 Bad Request` - Scout is already registered for the event
/// - `404 Not Found` - Scout or event does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/registrations",
    tag = REGISTRATION_TAG,
    request_body = CreateRegistrationDto,
    responses(
        (status = 201, description = "Successfully created registration", body = RegistrationDto),
        (status = 400, description = "Duplicate registration", body = ErrorDto),
        (status = 404, description = "Scout or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_registration(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let registration = RegistrationService::new(&state.db)
        .create_registration(CreateRegistrationParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved registration", body = RegistrationDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_registration(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registration = RegistrationService::new(&state.db)
        .get_registration(id)
        .await?;

    Ok(Json(registration.into_dto()))
}

/// Update note, status and account of a registration.
///
/// Scout and event are fixed once registered; the request must repeat them unchanged.
///
/// # Returns
/// - `200 OK` - Updated registration with incremented version
/// - `400 Bad Request` - Request names a different scout or event
/// - `404 Not Found` - Registration does not exist
/// - `409 Conflict` - Registration was updated by another request
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/registrations/{id}",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    request_body = UpdateRegistrationDto,
    responses(
        (status = 200, description = "Successfully updated registration", body = RegistrationDto),
        (status = 400, description = "Scout or event changed", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_registration(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateRegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let registration = RegistrationService::new(&state.db)
        .update_registration(UpdateRegistrationParam::from_dto(id, payload))
        .await?;

    Ok(Json(registration.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/registrations/{id}",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    responses(
        (status = 204, description = "Registration deleted"),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_registration(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    RegistrationService::new(&state.db)
        .delete_registration(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get all registrations for an event.
#[utoipa::path(
    get,
    path = "/api/events/{id}/registrations",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved registrations", body = Vec<RegistrationDto>),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_registrations(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registrations = RegistrationService::new(&state.db)
        .get_registrations_by_event(id)
        .await?;

    Ok(Json(into_dtos(registrations)))
}

/// Get all registrations of a scout.
#[utoipa::path(
    get,
    path = "/api/scouts/{id}/registrations",
    tag = REGISTRATION_TAG,
    params(
        ("id" = i32, Path, description = "Scout ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved registrations", body = Vec<RegistrationDto>),
        (status = 404, description = "Scout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scout_registrations(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let registrations = RegistrationService::new(&state.db)
        .get_registrations_by_scout(id)
        .await?;

    Ok(Json(into_dtos(registrations)))
}
