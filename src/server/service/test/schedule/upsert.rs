use super::*;

/// Tests submitting the same weekday twice.
///
/// Expected: created then updated in place, with a single entry listed
#[tokio::test]
async fn second_submission_updates_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let service = ScheduleService::new(db);
    let (first, created) = service.upsert(params(court.id, 1, 540, 660)).await?;
    assert!(created);

    let (second, created) = service.upsert(params(court.id, 1, 600, 1200)).await?;
    assert!(!created);
    assert_eq!(second.id, first.id);

    let entries = service.get_by_court(court.id).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].opening, 600);
    assert_eq!(entries[0].closing, 1200);

    Ok(())
}

/// Tests that existing bookings survive a schedule change.
///
/// Expected: Ok and the booking outside the new window still present
#[tokio::test]
async fn keeps_existing_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (court, _) = factory::helpers::create_open_court(db, 1).await?;
    let booking = factory::create_booking(db, court.id, "user-a").await?;

    let service = ScheduleService::new(db);
    service.upsert(params(court.id, 1, 18 * 60, 22 * 60)).await?;

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests scheduling a court that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_court() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ScheduleService::new(db);
    let result = service.upsert(params(55, 1, 540, 660)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two simultaneous submissions for the same weekday.
///
/// Expected: both succeed, exactly one reports creation, and a single entry remains
#[tokio::test]
async fn concurrent_submissions_keep_one_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let service = ScheduleService::new(db);
    let (first, second) = tokio::join!(
        service.upsert(params(court.id, 1, 540, 660)),
        service.upsert(params(court.id, 1, 600, 1200)),
    );

    let (first, first_created) = first?;
    let (second, second_created) = second?;
    assert_eq!(first.id, second.id);
    assert!(first_created ^ second_created);

    let entries = service.get_by_court(court.id).await?;
    assert_eq!(entries.len(), 1);

    Ok(())
}
