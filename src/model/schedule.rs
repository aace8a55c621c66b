use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleEntryDto {
    pub id: i32,
    pub court_id: i32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: i32,
    /// Opening time, "HH:MM"
    pub opening: String,
    /// Closing time, "HH:MM"
    pub closing: String,
    pub slot_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertScheduleEntryDto {
    pub court_id: i32,
    pub weekday: i32,
    pub opening: String,
    pub closing: String,
    /// Defaults to 60 when omitted
    pub slot_minutes: Option<i32>,
}

/// A free slot for a court on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailableSlotDto {
    /// Slot start, "HH:MM"
    pub time: String,
    pub available: bool,
}
