use crate::server::{
    data::group::GroupRepository,
    model::group::{CreateGroupParam, UpdateGroupParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_by_name;
mod find;
mod update;
