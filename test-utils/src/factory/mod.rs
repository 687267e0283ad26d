//! Factory methods for creating test data.
//!
//! Factories insert rows directly through the entity crate with sensible defaults,
//! so tests only spell out the fields they care about. Each entity has a `Factory`
//! builder for customization and a `create_*` shorthand for the defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let group = factory::create_group(&db).await?;
//! let scout = factory::scout::ScoutFactory::new(&db)
//!     .name("John Doe")
//!     .group(group.id)
//!     .build()
//!     .await?;
//! let event = factory::create_event(&db).await?;
//! let registration = factory::create_registration(&db, scout.id, event.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `group` - Create group rows
//! - `scout` - Create scouts with contacts and group associations
//! - `event` - Create events with participating groups
//! - `registration` - Create registrations for an existing scout and event
//! - `helpers` - Unique id generation and multi-entity setups

pub mod event;
pub mod group;
pub mod helpers;
pub mod registration;
pub mod scout;

pub use event::create_event;
pub use group::create_group;
pub use registration::create_registration;
pub use scout::create_scout;
