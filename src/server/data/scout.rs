use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::group::GroupRepository,
    model::{
        group::Group,
        scout::{Contact, CreateScoutParam, Scout, UpdateScoutParam},
    },
};

/// Repository for the scout aggregate.
///
/// A scout spans three tables: `scouts`, `scout_contacts` and `scout_groups`. Writes
/// touching more than one of them should run on a transaction so a failure leaves no
/// partial aggregate behind.
pub struct ScoutRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScoutRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a scout with its contacts and group associations.
    ///
    /// Referenced groups must exist.
    ///
    /// # Returns
    /// - `Ok(Scout)` - Created scout with version 0
    /// - `Err(DbErr)` - Database error, including foreign key violations for unknown groups
    pub async fn create(&self, params: CreateScoutParam) -> Result<Scout, DbErr> {
        let scout = entity::scout::ActiveModel {
            name: ActiveValue::Set(params.name),
            birth_date: ActiveValue::Set(params.birth_date),
            address: ActiveValue::Set(params.address),
            phone_number: ActiveValue::Set(params.phone_number),
            health_insurance: ActiveValue::Set(params.health_insurance),
            allergy_info: ActiveValue::Set(params.allergy_info),
            vaccination_info: ActiveValue::Set(params.vaccination_info),
            last_updated: ActiveValue::Set(params.last_updated),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_children(scout.id, params.contacts, &params.group_ids)
            .await?;

        self.find_by_id(scout.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Scout with id {} not found after creation",
                scout.id
            )))
    }

    /// Updates a scout if its stored version still matches, replacing contacts and groups.
    ///
    /// # Returns
    /// - `Ok(Scout)` - Updated scout carrying the incremented version
    /// - `Err(DbErr::RecordNotUpdated)` - Scout is missing or was modified concurrently
    pub async fn update(&self, params: UpdateScoutParam) -> Result<Scout, DbErr> {
        let result = entity::prelude::Scout::update_many()
            .set(entity::scout::ActiveModel {
                name: ActiveValue::Set(params.name),
                birth_date: ActiveValue::Set(params.birth_date),
                address: ActiveValue::Set(params.address),
                phone_number: ActiveValue::Set(params.phone_number),
                health_insurance: ActiveValue::Set(params.health_insurance),
                allergy_info: ActiveValue::Set(params.allergy_info),
                vaccination_info: ActiveValue::Set(params.vaccination_info),
                last_updated: ActiveValue::Set(params.last_updated),
                version: ActiveValue::Set(params.version + 1),
                ..Default::default()
            })
            .filter(entity::scout::Column::Id.eq(params.id))
            .filter(entity::scout::Column::Version.eq(params.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        entity::prelude::ScoutContact::delete_many()
            .filter(entity::scout_contact::Column::ScoutId.eq(params.id))
            .exec(self.db)
            .await?;
        entity::prelude::ScoutGroup::delete_many()
            .filter(entity::scout_group::Column::ScoutId.eq(params.id))
            .exec(self.db)
            .await?;

        self.insert_children(params.id, params.contacts, &params.group_ids)
            .await?;

        self.find_by_id(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Scout with id {} not found after update",
                params.id
            )))
    }

    /// Deletes a scout; contacts, group associations and registrations cascade
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Scout::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Scout>, DbErr> {
        let Some(scout) = entity::prelude::Scout::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load(vec![scout]).await?.pop())
    }

    pub async fn find_all(&self) -> Result<Vec<Scout>, DbErr> {
        let scouts = entity::prelude::Scout::find()
            .order_by_asc(entity::scout::Column::Id)
            .all(self.db)
            .await?;

        self.load(scouts).await
    }

    /// Gets scouts whose name equals `name` exactly
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Scout>, DbErr> {
        let scouts = entity::prelude::Scout::find()
            .filter(entity::scout::Column::Name.eq(name))
            .order_by_asc(entity::scout::Column::Id)
            .all(self.db)
            .await?;

        self.load(scouts).await
    }

    /// Gets the scouts with the given ids ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Scout>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let scouts = entity::prelude::Scout::find()
            .filter(entity::scout::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::scout::Column::Id)
            .all(self.db)
            .await?;

        self.load(scouts).await
    }

    async fn insert_children(
        &self,
        scout_id: i32,
        contacts: Vec<Contact>,
        group_ids: &[i32],
    ) -> Result<(), DbErr> {
        for (order, contact) in contacts.into_iter().enumerate() {
            entity::scout_contact::ActiveModel {
                scout_id: ActiveValue::Set(scout_id),
                contact_order: ActiveValue::Set(order as i32),
                name: ActiveValue::Set(contact.name),
                phone_number: ActiveValue::Set(contact.phone_number),
                email: ActiveValue::Set(contact.email),
                relationship: ActiveValue::Set(contact.relationship),
            }
            .insert(self.db)
            .await?;
        }

        let mut seen = Vec::with_capacity(group_ids.len());
        for &group_id in group_ids {
            if seen.contains(&group_id) {
                continue;
            }
            seen.push(group_id);

            entity::scout_group::ActiveModel {
                scout_id: ActiveValue::Set(scout_id),
                group_id: ActiveValue::Set(group_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Assembles aggregates for the given scout rows, keeping their order.
    ///
    /// Runs one query per child table regardless of how many scouts are loaded.
    async fn load(&self, scouts: Vec<entity::scout::Model>) -> Result<Vec<Scout>, DbErr> {
        if scouts.is_empty() {
            return Ok(Vec::new());
        }

        let scout_ids: Vec<i32> = scouts.iter().map(|s| s.id).collect();

        let contacts = entity::prelude::ScoutContact::find()
            .filter(entity::scout_contact::Column::ScoutId.is_in(scout_ids.clone()))
            .order_by_asc(entity::scout_contact::Column::ScoutId)
            .order_by_asc(entity::scout_contact::Column::ContactOrder)
            .all(self.db)
            .await?;

        let links = entity::prelude::ScoutGroup::find()
            .filter(entity::scout_group::Column::ScoutId.is_in(scout_ids))
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = links.iter().map(|l| l.group_id).collect();
        let groups: HashMap<i32, Group> = GroupRepository::new(self.db)
            .find_by_ids(&group_ids)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let mut contacts_by_scout: HashMap<i32, Vec<entity::scout_contact::Model>> =
            HashMap::new();
        for contact in contacts {
            contacts_by_scout
                .entry(contact.scout_id)
                .or_default()
                .push(contact);
        }

        let mut groups_by_scout: HashMap<i32, Vec<Group>> = HashMap::new();
        for link in links {
            if let Some(group) = groups.get(&link.group_id) {
                groups_by_scout
                    .entry(link.scout_id)
                    .or_default()
                    .push(group.clone());
            }
        }

        Ok(scouts
            .into_iter()
            .map(|scout| {
                let contacts = contacts_by_scout.remove(&scout.id).unwrap_or_default();
                let mut groups = groups_by_scout.remove(&scout.id).unwrap_or_default();
                groups.sort_by_key(|g| g.id);
                Scout::from_entity(scout, contacts, groups)
            })
            .collect())
    }
}
