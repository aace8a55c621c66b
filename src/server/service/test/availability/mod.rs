use crate::server::{service::availability::AvailabilityService, util::time::format_minutes};

use super::*;

mod candidate_slots;

fn times(slots: &[crate::server::model::availability::AvailableSlot]) -> Vec<String> {
    slots.iter().map(|s| format_minutes(s.start)).collect()
}
