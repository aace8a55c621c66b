use super::*;

/// Tests that deleting a court removes its schedule entries and bookings.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn cascades_to_schedules_and_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (court, _) = factory::helpers::create_open_court(db, 1).await?;
    factory::create_booking(db, court.id, "user-a").await?;

    let repo = CourtRepository::new(db);
    let deleted = repo.delete(court.id).await?;

    assert!(deleted);
    assert!(entity::prelude::ScheduleEntry::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Booking::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a court that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_court() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourtRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
