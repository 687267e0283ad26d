//! HTTP request handlers.
//!
//! Controllers convert request DTOs into server-side parameter types, call the
//! matching service, and convert the domain result back into a response DTO. Every
//! `/api` handler carries a `#[utoipa::path]` annotation collected by the router's
//! OpenAPI document.

pub mod event;
pub mod group;
pub mod health;
pub mod metrics;
pub mod registration;
pub mod scout;
