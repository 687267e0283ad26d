pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_groups_table;
mod m20250301_000002_create_scouts_table;
mod m20250301_000003_create_scout_contacts_table;
mod m20250301_000004_create_scout_groups_table;
mod m20250301_000005_create_events_table;
mod m20250301_000006_create_event_groups_table;
mod m20250301_000007_create_registrations_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_groups_table::Migration),
            Box::new(m20250301_000002_create_scouts_table::Migration),
            Box::new(m20250301_000003_create_scout_contacts_table::Migration),
            Box::new(m20250301_000004_create_scout_groups_table::Migration),
            Box::new(m20250301_000005_create_events_table::Migration),
            Box::new(m20250301_000006_create_event_groups_table::Migration),
            Box::new(m20250301_000007_create_registrations_table::Migration),
        ]
    }
}
