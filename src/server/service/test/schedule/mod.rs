use crate::server::{
    model::schedule::UpsertScheduleEntryParams, service::schedule::ScheduleService,
};
use sea_orm::EntityTrait;

use super::*;

mod upsert;

fn params(court_id: i32, weekday: i32, opening: u32, closing: u32) -> UpsertScheduleEntryParams {
    UpsertScheduleEntryParams {
        court_id,
        weekday,
        opening,
        closing,
        slot_minutes: 60,
    }
}
