use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        error::AppError,
        extractor::{ApiJson, ApiPath},
        model::event::{CreateEventParam, UpdateEventParam},
        service::event::{event_not_found, EventService},
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create a new event.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Event data including participating group ids
///
/// # Returns
/// - `201 Created` - Successfully created event
/// - `400 Bad Request` - Blank name or location
/// - `404 Not Found` - A referenced group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .create_event(CreateEventParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all_events().await?;

    Ok(Json(
        events
            .into_iter()
            .map(|event| event.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .get_event(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    Ok(Json(event.into_dto()))
}

/// Update an event, replacing its participating groups.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 404, description = "Event or group not found", body = ErrorDto),
        (status = 409, description = "Stale version", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .update_event(UpdateEventParam::from_dto(id, payload))
        .await?;

    Ok(Json(event.into_dto()))
}

/// Delete an event together with its registrations.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(&state.db).delete_event(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a group to an event's participating groups.
///
/// Assigning a group that already participates leaves the list unchanged.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Event ID
/// - `group_id` - Group ID to assign
///
/// # Returns
/// - `200 OK` - Event with its updated groups
/// - `404 Not Found` - Event or group does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/events/{id}/groups/{group_id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group assigned", body = EventDto),
        (status = 404, description = "Event or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_group(
    State(state): State<AppState>,
    ApiPath((id, group_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .assign_group_to_event(id, group_id)
        .await?;

    Ok(Json(event.into_dto()))
}

/// Remove a group from an event's participating groups.
#[utoipa::path(
    delete,
    path = "/api/events/{id}/groups/{group_id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID"),
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group removed", body = EventDto),
        (status = 404, description = "Event or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_group(
    State(state): State<AppState>,
    ApiPath((id, group_id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .remove_group_from_event(id, group_id)
        .await?;

    Ok(Json(event.into_dto()))
}
