use crate::{model::schedule::AvailableSlotDto, server::util::time::format_minutes};

/// A slot that is free to book, as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailableSlot {
    pub start: u32,
}

impl AvailableSlot {
    pub fn into_dto(self) -> AvailableSlotDto {
        AvailableSlotDto {
            time: format_minutes(self.start),
            available: true,
        }
    }
}
