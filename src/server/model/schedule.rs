//! Weekly opening rules for courts and the slot sequence derived from them.

use sea_orm::DbErr;

use crate::{
    model::schedule::{ScheduleEntryDto, UpsertScheduleEntryDto},
    server::{
        error::AppError,
        util::time::{format_minutes, parse_minutes},
    },
};

/// Slot length used when a schedule entry is submitted without one.
pub const DEFAULT_SLOT_MINUTES: i32 = 60;

/// Opening window and slot length of a court on one day of the week.
///
/// Times of day are stored as minutes since midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub id: i32,
    pub court_id: i32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: i32,
    pub opening: u32,
    pub closing: u32,
    pub slot_minutes: u32,
}

impl ScheduleEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ScheduleEntry)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored opening or closing is not `HH:MM`, or the slot length
    ///   is negative
    pub fn from_entity(entity: entity::schedule_entry::Model) -> Result<Self, DbErr> {
        let opening = parse_minutes(&entity.opening).ok_or_else(|| {
            DbErr::Custom(format!(
                "Invalid opening time '{}' for schedule entry {}",
                entity.opening, entity.id
            ))
        })?;
        let closing = parse_minutes(&entity.closing).ok_or_else(|| {
            DbErr::Custom(format!(
                "Invalid closing time '{}' for schedule entry {}",
                entity.closing, entity.id
            ))
        })?;
        let slot_minutes = u32::try_from(entity.slot_minutes).map_err(|e| {
            DbErr::Custom(format!(
                "Invalid slot length for schedule entry {}: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            court_id: entity.court_id,
            weekday: entity.weekday,
            opening,
            closing,
            slot_minutes,
        })
    }

    pub fn into_dto(self) -> ScheduleEntryDto {
        ScheduleEntryDto {
            id: self.id,
            court_id: self.court_id,
            weekday: self.weekday,
            opening: format_minutes(self.opening),
            closing: format_minutes(self.closing),
            slot_minutes: self.slot_minutes as i32,
        }
    }

    /// Slot start offsets within the opening window, in ascending order.
    ///
    /// A slot is produced while it ends no later than closing. Each call returns a fresh
    /// iterator over the same sequence.
    pub fn slots(&self) -> Slots {
        Slots {
            next: self.opening,
            step: self.slot_minutes,
            closing: self.closing,
        }
    }
}

/// Lazy sequence of slot start offsets in minutes since midnight.
///
/// The default value is an empty sequence.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    next: u32,
    step: u32,
    closing: u32,
}

impl Iterator for Slots {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        // A zero step would never advance.
        if self.step == 0 {
            return None;
        }

        let start = self.next;
        if start + self.step > self.closing {
            return None;
        }

        self.next = start + self.step;
        Some(start)
    }
}

/// Validated parameters for creating or replacing a court's schedule on one weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertScheduleEntryParams {
    pub court_id: i32,
    pub weekday: i32,
    pub opening: u32,
    pub closing: u32,
    pub slot_minutes: u32,
}

impl UpsertScheduleEntryParams {
    /// Validates and converts the request DTO.
    ///
    /// # Returns
    /// - `Ok(UpsertScheduleEntryParams)` - Valid schedule entry
    /// - `Err(AppError::BadRequest)` - Weekday outside 0..=6, unparseable times, opening not
    ///   before closing, or a non-positive slot length
    pub fn from_dto(dto: UpsertScheduleEntryDto) -> Result<Self, AppError> {
        if !(0..=6).contains(&dto.weekday) {
            return Err(AppError::BadRequest(format!(
                "Weekday must be between 0 (Sunday) and 6 (Saturday), got {}",
                dto.weekday
            )));
        }

        let opening = parse_minutes(&dto.opening).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid opening time '{}'", dto.opening))
        })?;
        let closing = parse_minutes(&dto.closing).ok_or_else(|| {
            AppError::BadRequest(format!("Invalid closing time '{}'", dto.closing))
        })?;

        if opening >= closing {
            return Err(AppError::BadRequest(
                "Opening time must be before closing time".to_string(),
            ));
        }

        let slot_minutes = dto.slot_minutes.unwrap_or(DEFAULT_SLOT_MINUTES);
        if slot_minutes <= 0 {
            return Err(AppError::BadRequest(
                "Slot length must be a positive number of minutes".to_string(),
            ));
        }

        Ok(Self {
            court_id: dto.court_id,
            weekday: dto.weekday,
            opening,
            closing,
            slot_minutes: slot_minutes as u32,
        })
    }
}
