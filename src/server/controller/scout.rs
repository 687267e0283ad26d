use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        scout::{CreateScoutDto, ScoutDto, UpdateScoutDto},
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath},
        model::scout::{CreateScoutParam, UpdateScoutParam},
        service::scout::{scout_not_found, ScoutService},
        state::AppState,
    },
};

/// Tag for grouping scout endpoints in OpenAPI documentation
pub static SCOUT_TAG: &str = "scout";

#[derive(Deserialize)]
pub struct ScoutQuery {
    /// Exact scout name to filter by
    pub name: Option<String>,
}

/// Create a new scout.
///
/// Stores the scout together with its emergency contacts and group memberships in a
/// single transaction. `last_updated` is set by the server.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Scout data including contacts and group ids
///
/// # Returns
/// - `201 Created` - Successfully created scout
/// - `400 Bad Request` - A required field is blank or a contact is invalid
/// - `404 Not Found` - A referenced group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/scouts",
    tag = SCOUT_TAG,
    request_body = CreateScoutDto,
    responses(
        (status = 201, description = "Successfully created scout", body = ScoutDto),
        (status = 400, description = "Invalid scout data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_scout(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateScoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let scout = ScoutService::new(&state.db)
        .create_scout(CreateScoutParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(scout.into_dto())))
}

/// List scouts, optionally only those with exactly the given name.
#[utoipa::path(
    get,
    path = "/api/scouts",
    tag = SCOUT_TAG,
    params(
        ("name" = Option<String>, Query, description = "Exact scout name")
    ),
    responses(
        (status = 200, description = "Successfully retrieved scouts", body = Vec<ScoutDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scouts(
    State(state): State<AppState>,
    Query(query): Query<ScoutQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScoutService::new(&state.db);

    let scouts = match query.name {
        Some(name) => service.find_scouts_by_name(&name).await?,
        None => service.get_all_scouts().await?,
    };

    Ok(Json(
        scouts
            .into_iter()
            .map(|scout| scout.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/scouts/{id}",
    tag = SCOUT_TAG,
    params(
        ("id" = i32, Path, description = "Scout ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved scout", body = ScoutDto),
        (status = 404, description = "Scout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scout(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let scout = ScoutService::new(&state.db)
        .get_scout(id)
        .await?
        .ok_or_else(|| scout_not_found(id))?;

    Ok(Json(scout.into_dto()))
}

/// Update a scout.
///
/// Contacts and group memberships are replaced by the ones in the request.
///
/// # Returns
/// - `200 OK` - Updated scout with incremented version
/// - `400 Bad Request` - Invalid scout data
/// - `404 Not Found` - Scout or a referenced group does not exist
/// - `409 Conflict` - Scout was updated by another request
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/scouts/{id}",
    tag = SCOUT_TAG,
    params(
        ("id" = i32, Path, description = "Scout ID")
    ),
    request_body = UpdateScoutDto,
    responses(
        (status = 200, description = "Successfully updated scout", body = ScoutDto),
        (status = 400, description = "Invalid scout data", body = ErrorDto),
        (status = 404, description = "Scout or group not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_scout(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateScoutDto>,
) -> Result<impl IntoResponse, AppError> {
    let scout = ScoutService::new(&state.db)
        .update_scout(UpdateScoutParam::from_dto(id, payload))
        .await?;

    Ok(Json(scout.into_dto()))
}

/// Delete a scout together with its registrations.
#[utoipa::path(
    delete,
    path = "/api/scouts/{id}",
    tag = SCOUT_TAG,
    params(
        ("id" = i32, Path, description = "Scout ID")
    ),
    responses(
        (status = 204, description = "Scout deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_scout(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    ScoutService::new(&state.db).delete_scout(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
