use crate::server::{
    data::court::CourtRepository,
    model::court::{CreateCourtParams, UpdateCourtParams},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod update;
