use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_court_table::Court;

/// Partial unique index allowing at most one non-cancelled booking per court and start time.
///
/// Kept as raw SQL since the condition cannot be expressed through the index builder. The
/// statement is valid for both SQLite and Postgres.
pub const ACTIVE_BOOKING_SLOT_INDEX_SQL: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
    idx_booking_active_slot ON booking (court_id, start_at) WHERE status <> 'Cancelled'";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::CourtId))
                    .col(string(Booking::OwnerId))
                    .col(date_time(Booking::StartAt))
                    .col(date_time(Booking::EndAt))
                    .col(string(Booking::Status).default("Confirmed"))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Booking::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_court_id")
                            .from(Booking::Table, Booking::CourtId)
                            .to(Court::Table, Court::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_owner_id")
                    .table(Booking::Table)
                    .col(Booking::OwnerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(ACTIVE_BOOKING_SLOT_INDEX_SQL)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    CourtId,
    OwnerId,
    StartAt,
    EndAt,
    Status,
    CreatedAt,
    UpdatedAt,
}
