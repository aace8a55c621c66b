use super::*;

/// Tests finding the active booking at an exact start time.
///
/// Expected: Ok(Some) for the matching slot, Ok(None) for a neighbouring one
#[tokio::test]
async fn matches_exact_start_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    let booking = factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(monday_at(10))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let found = repo.find_active_at(court.id, monday_at(10)).await?;
    assert_eq!(found.map(|b| b.id), Some(booking.id));
    assert!(repo.find_active_at(court.id, monday_at(11)).await?.is_none());

    Ok(())
}

/// Tests that cancelled bookings are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_cancelled_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(monday_at(10))
        .status("Cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(repo.find_active_at(court.id, monday_at(10)).await?.is_none());

    Ok(())
}
