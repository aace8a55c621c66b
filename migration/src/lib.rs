pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_court_table;
mod m20251101_000002_create_schedule_entry_table;
mod m20251101_000003_create_booking_table;

pub use m20251101_000002_create_schedule_entry_table::SCHEDULE_ENTRY_WEEKDAY_INDEX_SQL;
pub use m20251101_000003_create_booking_table::ACTIVE_BOOKING_SLOT_INDEX_SQL;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_court_table::Migration),
            Box::new(m20251101_000002_create_schedule_entry_table::Migration),
            Box::new(m20251101_000003_create_booking_table::Migration),
        ]
    }
}
