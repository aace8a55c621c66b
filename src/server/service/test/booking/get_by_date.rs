use super::*;

/// Tests the daily overview across courts.
///
/// Expected: Ok with every booking of that date, none from neighbouring days
#[tokio::test]
async fn returns_bookings_of_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    let other_court = factory::create_court(db).await?;

    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(at(monday(), 23, 0))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, other_court.id, "user-b")
        .start_at(at(monday(), 0, 0))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, court.id, "user-a")
        .start_at(at(monday() + Duration::days(1), 0, 0))
        .build()
        .await?;

    let clock = early_clock();
    let service = BookingService::new(db, &clock);
    let bookings = service.get_by_date(monday()).await?;

    let starts: Vec<NaiveDateTime> = bookings.iter().map(|b| b.booking.start_at).collect();
    assert_eq!(starts, vec![at(monday(), 0, 0), at(monday(), 23, 0)]);

    Ok(())
}
