use super::*;

/// Tests creating a booking.
///
/// Expected: Ok with a confirmed booking
#[tokio::test]
async fn creates_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParams {
            court_id: court.id,
            owner_id: "user-a".to_string(),
            start_at: monday_at(10),
            end_at: monday_at(11),
        })
        .await?;

    assert_eq!(booking.court_id, court.id);
    assert_eq!(booking.owner_id, "user-a");
    assert_eq!(booking.start_at, monday_at(10));
    assert_eq!(booking.end_at, monday_at(11));
    assert_eq!(booking.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests that a second active booking for the same court and start is refused by the
/// store.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_active_booking_for_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(monday_at(10))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            court_id: court.id,
            owner_id: "user-b".to_string(),
            start_at: monday_at(10),
            end_at: monday_at(11),
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a cancelled booking does not hold its slot.
///
/// Expected: Ok with a new booking for the same start
#[tokio::test]
async fn allows_booking_over_cancelled_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(monday_at(10))
        .status("Cancelled")
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            court_id: court.id,
            owner_id: "user-b".to_string(),
            start_at: monday_at(10),
            end_at: monday_at(11),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}
