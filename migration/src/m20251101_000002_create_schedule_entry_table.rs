use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_court_table::Court;

/// One opening rule per court and weekday.
pub const SCHEDULE_ENTRY_WEEKDAY_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_schedule_entry_court_weekday ON schedule_entry (court_id, weekday)";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ScheduleEntry::Id))
                    .col(integer(ScheduleEntry::CourtId))
                    .col(integer(ScheduleEntry::Weekday))
                    .col(string(ScheduleEntry::Opening))
                    .col(string(ScheduleEntry::Closing))
                    .col(integer(ScheduleEntry::SlotMinutes).default(60))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_entry_court_id")
                            .from(ScheduleEntry::Table, ScheduleEntry::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(SCHEDULE_ENTRY_WEEKDAY_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScheduleEntry {
    Table,
    Id,
    CourtId,
    Weekday,
    Opening,
    Closing,
    SlotMinutes,
}
