use crate::server::{data::message::MessageRepository, model::message::SendMessageParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_group_id;
