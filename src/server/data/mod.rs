//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Every repository borrows a connection generic
//! over `ConnectionTrait`, so the same code runs on the pool or inside a transaction.
//!
//! Updates use optimistic locking: the row is only written when the caller's version
//! matches the stored one, and a mismatch surfaces as `DbErr::RecordNotUpdated`.

pub mod event;
pub mod group;
pub mod registration;
pub mod scout;

#[cfg(test)]
mod test;
