use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
        registration::{
            CreateRegistrationDto, RegistrationDto, RegistrationStatusDto, UpdateRegistrationDto,
        },
        scout::{ContactDto, CreateScoutDto, ScoutDto, UpdateScoutDto},
    },
    server::{
        controller::{
            event, group, health::health, metrics::prometheus_metrics, registration, scout,
        },
        middleware::metrics::track_metrics,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Scouts API", description = "Scout group administration"),
    paths(
        group::create_group,
        group::get_all_groups,
        group::get_group,
        group::update_group,
        group::delete_group,
        group::get_group_events,
        scout::create_scout,
        scout::get_scouts,
        scout::get_scout,
        scout::update_scout,
        scout::delete_scout,
        event::create_event,
        event::get_all_events,
        event::get_event,
        event::update_event,
        event::delete_event,
        event::assign_group,
        event::remove_group,
        registration::create_registration,
        registration::get_registration,
        registration::update_registration,
        registration::delete_registration,
        registration::get_event_registrations,
        registration::get_scout_registrations,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        GroupDto,
        CreateGroupDto,
        UpdateGroupDto,
        ContactDto,
        ScoutDto,
        CreateScoutDto,
        UpdateScoutDto,
        EventDto,
        CreateEventDto,
        UpdateEventDto,
        RegistrationStatusDto,
        RegistrationDto,
        CreateRegistrationDto,
        UpdateRegistrationDto,
    )),
    tags(
        (name = "group", description = "Scout groups"),
        (name = "scout", description = "Scouts with emergency contacts"),
        (name = "event", description = "Events and their participating groups"),
        (name = "registration", description = "Registrations of scouts for events"),
    )
)]
pub struct ApiDoc;

async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/groups",
            get(group::get_all_groups).post(group::create_group),
        )
        .route(
            "/api/groups/{id}",
            get(group::get_group)
                .put(group::update_group)
                .delete(group::delete_group),
        )
        .route("/api/groups/{id}/events", get(group::get_group_events))
        .route("/api/scouts", get(scout::get_scouts).post(scout::create_scout))
        .route(
            "/api/scouts/{id}",
            get(scout::get_scout)
                .put(scout::update_scout)
                .delete(scout::delete_scout),
        )
        .route(
            "/api/scouts/{id}/registrations",
            get(registration::get_scout_registrations),
        )
        .route(
            "/api/events",
            get(event::get_all_events).post(event::create_event),
        )
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/events/{id}/groups/{group_id}",
            put(event::assign_group).delete(event::remove_group),
        )
        .route(
            "/api/events/{id}/registrations",
            get(registration::get_event_registrations),
        )
        .route("/api/registrations", post(registration::create_registration))
        .route(
            "/api/registrations/{id}",
            get(registration::get_registration)
                .put(registration::update_registration)
                .delete(registration::delete_registration),
        )
        .route("/v3/api-docs", get(api_docs))
        .route("/actuator/health", get(health))
        .route("/actuator/prometheus", get(prometheus_metrics))
        .route_layer(from_fn_with_state(state.clone(), track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
