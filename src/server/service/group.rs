use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::group::GroupRepository,
    error::AppError,
    model::group::{CreateGroupParam, Group, UpdateGroupParam},
    service::validation::require_not_blank,
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group, rejecting names that are already taken
    pub async fn create_group(&self, params: CreateGroupParam) -> Result<Group, AppError> {
        require_not_blank(&params.name, "name")?;

        let repo = GroupRepository::new(self.db);

        if repo.exists_by_name(&params.name).await? {
            return Err(AppError::BadRequest(format!(
                "Group with name '{}' already exists",
                params.name
            )));
        }

        let group = repo.create(params).await?;

        tracing::info!("Created group {} '{}'", group.id, group.name);

        Ok(group)
    }

    pub async fn get_group(&self, id: i32) -> Result<Option<Group>, AppError> {
        Ok(GroupRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all_groups(&self) -> Result<Vec<Group>, AppError> {
        Ok(GroupRepository::new(self.db).find_all().await?)
    }

    /// Updates a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - Updated group with incremented version
    /// - `Err(AppError::NotFound)` - Group does not exist
    /// - `Err(AppError::DbErr(RecordNotUpdated))` - `params.version` is stale
    pub async fn update_group(&self, params: UpdateGroupParam) -> Result<Group, AppError> {
        require_not_blank(&params.name, "name")?;

        let repo = GroupRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(group_not_found(params.id));
        }

        Ok(repo.update(params).await?)
    }

    /// Deletes a group. Deleting a missing group is a no-op.
    pub async fn delete_group(&self, id: i32) -> Result<(), AppError> {
        GroupRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted group {}", id);

        Ok(())
    }
}

pub(crate) fn group_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Group with id {} does not exist", id))
}

/// Fails with `NotFound` for the first id in `ids` that names no stored group.
pub(crate) async fn ensure_groups_exist<C: ConnectionTrait>(
    db: &C,
    ids: &[i32],
) -> Result<(), AppError> {
    let found = GroupRepository::new(db).find_by_ids(ids).await?;

    match ids.iter().find(|id| !found.iter().any(|g| g.id == **id)) {
        Some(&missing) => Err(group_not_found(missing)),
        None => Ok(()),
    }
}
