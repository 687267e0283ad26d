//! Scout factory for creating test scouts together with their contacts and
//! group associations.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Contact row data used by [`ScoutFactory`].
#[derive(Clone, Debug)]
pub struct ContactData {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub relationship: String,
}

/// Factory for creating test scouts with customizable fields.
///
/// By default the scout gets a single parent contact and no groups.
///
/// # Example
///
/// ```rust,ignore
/// let scout = ScoutFactory::new(&db)
///     .name("John Doe")
///     .group(group.id)
///     .build()
///     .await?;
/// ```
pub struct ScoutFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    birth_date: NaiveDate,
    address: String,
    phone_number: String,
    health_insurance: String,
    contacts: Vec<ContactData>,
    group_ids: Vec<i32>,
}

impl<'a> ScoutFactory<'a> {
    /// Creates a new ScoutFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Scout {id}"` where id is auto-incremented
    /// - birth_date: 2010-05-15
    /// - contacts: one parent contact
    /// - groups: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Scout {}", id),
            birth_date: NaiveDate::from_ymd_opt(2010, 5, 15).expect("valid date"),
            address: format!("Main Street {}", id),
            phone_number: "+49 123 456789".to_string(),
            health_insurance: "AOK".to_string(),
            contacts: vec![ContactData {
                name: format!("Parent {}", id),
                phone_number: "+49 987 654321".to_string(),
                email: format!("parent{}@example.com", id),
                relationship: "Parent".to_string(),
            }],
            group_ids: Vec::new(),
        }
    }

    /// Sets the scout name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the birth date.
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = birth_date;
        self
    }

    /// Replaces the contact list.
    pub fn contacts(mut self, contacts: Vec<ContactData>) -> Self {
        self.contacts = contacts;
        self
    }

    /// Adds a group association. The group must already exist.
    pub fn group(mut self, group_id: i32) -> Self {
        self.group_ids.push(group_id);
        self
    }

    /// Builds and inserts the scout, its contacts and its group associations.
    ///
    /// # Returns
    /// - `Ok(entity::scout::Model)` - Created scout row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::scout::Model, DbErr> {
        let scout = entity::scout::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            birth_date: ActiveValue::Set(self.birth_date),
            address: ActiveValue::Set(self.address),
            phone_number: ActiveValue::Set(self.phone_number),
            health_insurance: ActiveValue::Set(self.health_insurance),
            allergy_info: ActiveValue::Set(String::new()),
            vaccination_info: ActiveValue::Set(String::new()),
            last_updated: ActiveValue::Set(self.birth_date),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        for (order, contact) in self.contacts.into_iter().enumerate() {
            entity::scout_contact::ActiveModel {
                scout_id: ActiveValue::Set(scout.id),
                contact_order: ActiveValue::Set(order as i32),
                name: ActiveValue::Set(contact.name),
                phone_number: ActiveValue::Set(contact.phone_number),
                email: ActiveValue::Set(contact.email),
                relationship: ActiveValue::Set(contact.relationship),
            }
            .insert(self.db)
            .await?;
        }

        for group_id in self.group_ids {
            entity::scout_group::ActiveModel {
                scout_id: ActiveValue::Set(scout.id),
                group_id: ActiveValue::Set(group_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(scout)
    }
}

/// Creates a scout with default values.
///
/// Shorthand for `ScoutFactory::new(db).build().await`.
pub async fn create_scout(db: &DatabaseConnection) -> Result<entity::scout::Model, DbErr> {
    ScoutFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::group::create_group;
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn creates_scout_with_default_contact() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let scout = create_scout(db).await?;

        let contacts = ScoutContact::find()
            .filter(entity::scout_contact::Column::ScoutId.eq(scout.id))
            .count(db)
            .await?;
        assert_eq!(contacts, 1);
        assert_eq!(scout.version, 0);

        Ok(())
    }

    #[tokio::test]
    async fn creates_scout_with_groups() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_scout_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_group(db).await?;
        let second = create_group(db).await?;
        let scout = ScoutFactory::new(db)
            .group(first.id)
            .group(second.id)
            .build()
            .await?;

        let groups = ScoutGroup::find()
            .filter(entity::scout_group::Column::ScoutId.eq(scout.id))
            .count(db)
            .await?;
        assert_eq!(groups, 2);

        Ok(())
    }
}
