//! Typed records mirroring the `public` schema created by the `migration` crate.
//!
//! One module per table. Keep these in sync with the migrations; the test
//! harness builds its SQLite schema from these definitions.

pub mod prelude;

pub mod event;
pub mod event_group;
pub mod group;
pub mod registration;
pub mod scout;
pub mod scout_contact;
pub mod scout_group;
