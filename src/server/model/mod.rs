//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of
//! a single create or update operation from the controller down to the repository.

pub mod event;
pub mod group;
pub mod registration;
pub mod scout;
