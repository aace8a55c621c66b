//! SeaORM entities for the padel club schema.

pub mod prelude;

pub mod booking;
pub mod court;
pub mod schedule_entry;
