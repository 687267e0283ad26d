use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::EventDto,
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath},
        model::group::{CreateGroupParam, UpdateGroupParam},
        service::{
            event::EventService,
            group::{group_not_found, GroupService},
        },
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create a new group.
///
/// Group names are unique; creating a second group with an existing name fails.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Group creation data
///
/// # Returns
/// - `201 Created` - Successfully created group
/// - `400 Bad Request` - Blank or duplicate name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Blank or duplicate group name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GroupService::new(&state.db);

    let group = service
        .create_group(CreateGroupParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Get all groups ordered by id.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all_groups().await?;

    Ok(Json(
        groups
            .into_iter()
            .map(|group| group.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .get_group(id)
        .await?
        .ok_or_else(|| group_not_found(id))?;

    Ok(Json(group.into_dto()))
}

/// Update a group.
///
/// The request must carry the version the client last read. A stale version is
/// rejected with 409 and nothing is written.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Group ID
/// - `payload` - New name and expected version
///
/// # Returns
/// - `200 OK` - Updated group with incremented version
/// - `400 Bad Request` - Blank name
/// - `404 Not Found` - Group does not exist
/// - `409 Conflict` - Group was updated by another request
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .update_group(UpdateGroupParam::from_dto(id, payload))
        .await?;

    Ok(Json(group.into_dto()))
}

/// Delete a group. Succeeds for unknown ids as well.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db).delete_group(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the events a group explicitly participates in.
///
/// # Returns
/// - `200 OK` - Events listing the group, possibly empty
/// - `404 Not Found` - Group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/groups/{id}/events",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_events(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_events_for_group(id)
        .await?;

    Ok(Json(
        events
            .into_iter()
            .map(|event| event.into_dto())
            .collect::<Vec<_>>(),
    ))
}
