use super::*;

/// Tests listing the caller's bookings.
///
/// Expected: Ok with only the caller's bookings, including cancelled ones
#[tokio::test]
async fn returns_only_callers_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(at(monday(), 9, 0))
        .status("Cancelled")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(at(monday(), 10, 0))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, court.id, "user-b")
        .start_at(at(monday(), 11, 0))
        .build()
        .await?;

    let clock = early_clock();
    let service = BookingService::new(db, &clock);
    let bookings = service.get_mine(&user("user-a")).await?;

    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b.booking.owner_id == "user-a"));
    assert_eq!(bookings[0].booking.status, BookingStatus::Cancelled);
    assert_eq!(bookings[1].court.as_ref().map(|c| c.id), Some(court.id));

    Ok(())
}
