pub use super::event::Entity as Event;
pub use super::event_group::Entity as EventGroup;
pub use super::group::Entity as Group;
pub use super::registration::Entity as Registration;
pub use super::scout::Entity as Scout;
pub use super::scout_contact::Entity as ScoutContact;
pub use super::scout_group::Entity as ScoutGroup;
