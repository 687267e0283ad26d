use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::group::{CreateGroupParam, Group, UpdateGroupParam};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new group with version 0
    pub async fn create(&self, params: CreateGroupParam) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(params.name),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Updates a group if its stored version still matches `params.version`.
    ///
    /// # Returns
    /// - `Ok(Group)` - Updated group carrying the incremented version
    /// - `Err(DbErr::RecordNotUpdated)` - Group is missing or was modified concurrently
    pub async fn update(&self, params: UpdateGroupParam) -> Result<Group, DbErr> {
        let result = entity::prelude::Group::update_many()
            .set(entity::group::ActiveModel {
                name: ActiveValue::Set(params.name),
                version: ActiveValue::Set(params.version + 1),
                ..Default::default()
            })
            .filter(entity::group::Column::Id.eq(params.id))
            .filter(entity::group::Column::Version.eq(params.version))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotUpdated);
        }

        self.find_by_id(params.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Group with id {} not found after update",
                params.id
            )))
    }

    /// Deletes a group; scout and event associations go with it
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    pub async fn find_all(&self) -> Result<Vec<Group>, DbErr> {
        let entities = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Gets the groups with the given ids ordered by id. Unknown ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Group>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Group::find()
            .filter(entity::group::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Group::from_entity).collect())
    }

    /// Checks whether a group with exactly this name exists
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
