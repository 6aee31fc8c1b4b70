use crate::server::{data::group::GroupRepository, model::group::CreateGroupParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
mod get_all;
