use super::*;

/// Tests the full reserve, cancel, re-cancel cycle.
///
/// Expected: booking cancelled, second cancel Err(BookingError::AlreadyCancelled), and the
/// slot offered again
#[tokio::test]
async fn cancel_frees_slot_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (court, _) = factory::helpers::create_open_court(db, 1).await?;

    let clock = early_clock();
    let service = BookingService::new(db, &clock);
    let owner = user("user-a");

    let booking = service
        .reserve(reserve_params(court.id, monday(), "10:00"), &owner)
        .await?;
    assert_eq!(booking.start_at, at(monday(), 10, 0));
    assert_eq!(booking.end_at, at(monday(), 11, 0));

    let availability = AvailabilityService::new(db);
    let before: Vec<String> = availability
        .get_available(court.id, monday())
        .await?
        .into_iter()
        .map(|s| format_minutes(s.start))
        .collect();
    assert_eq!(before, vec!["09:00"]);

    let cancelled = service.cancel(booking.id, &owner).await?;
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let again = service.cancel(booking.id, &owner).await;
    assert!(matches!(
        again,
        Err(AppError::BookingErr(BookingError::AlreadyCancelled(_)))
    ));

    let after: Vec<String> = availability
        .get_available(court.id, monday())
        .await?
        .into_iter()
        .map(|s| format_minutes(s.start))
        .collect();
    assert_eq!(after, vec!["09:00", "10:00"]);

    // The freed slot can be booked again
    assert!(service
        .reserve(reserve_params(court.id, monday(), "10:00"), &user("user-b"))
        .await
        .is_ok());

    Ok(())
}

/// Tests cancelling someone else's booking.
///
/// Expected: Err(BookingError::NotOwner) and the booking stays confirmed
#[tokio::test]
async fn rejects_other_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    let booking = factory::create_booking(db, court.id, "user-b").await?;

    let clock = early_clock();
    let service = BookingService::new(db, &clock);
    let result = service.cancel(booking.id, &user("user-a")).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotOwner(_)))
    ));

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "Confirmed");

    Ok(())
}

/// Tests cancelling a booking that does not exist.
///
/// Expected: Err(AppError::NotFound), not an ownership error
#[tokio::test]
async fn unknown_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clock = early_clock();
    let service = BookingService::new(db, &clock);
    let result = service.cancel(12345, &user("user-a")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
