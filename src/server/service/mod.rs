//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the business
//! rules (existence checks, duplicate detection, immutable fields, field validation) and
//! run writes that span several tables inside a single transaction.

pub mod event;
pub mod group;
pub mod registration;
pub mod scout;
pub mod validation;

#[cfg(test)]
mod test;
