//! Group factory for creating test group rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db).name("Wölflinge").build().await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Group {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group with version 0.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
///
/// Shorthand for `GroupFactory::new(db).build().await`.
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_group_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let group = create_group(db).await?;

        assert!(group.name.starts_with("Group "));
        assert_eq!(group.version, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_groups() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_group_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_group(db).await?;
        let second = GroupFactory::new(db).name("Pfadfinder").build().await?;

        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Pfadfinder");

        Ok(())
    }
}
