//! Request and response bodies of the HTTP API.
//!
//! Every type here derives `ToSchema` so the OpenAPI document served at
//! `/v3/api-docs` describes exactly what the handlers accept and return.

pub mod api;
pub mod event;
pub mod group;
pub mod registration;
pub mod scout;
