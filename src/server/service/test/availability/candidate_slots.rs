use super::*;

/// Tests that a weekday without a schedule entry yields no slots.
///
/// Expected: Ok with an empty sequence
#[tokio::test]
async fn empty_without_schedule_for_weekday() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    // Open on Tuesdays only
    let (court, _) = factory::helpers::create_open_court(db, 2).await?;

    let service = AvailabilityService::new(db);
    let slots = service.candidate_slots(court.id, monday()).await?;

    assert_eq!(slots.count(), 0);

    Ok(())
}

/// Tests slot generation from the schedule of the date's weekday.
///
/// Expected: Ok with 09:00 and 10:00 for a 09:00-11:00 window of 60 minute slots
#[tokio::test]
async fn follows_schedule_of_weekday() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;
    factory::schedule_entry::ScheduleEntryFactory::new(db, court.id, 1)
        .hours("09:00", "11:00")
        .slot_minutes(60)
        .build()
        .await?;
    factory::schedule_entry::ScheduleEntryFactory::new(db, court.id, 2)
        .hours("14:00", "20:00")
        .build()
        .await?;

    let service = AvailabilityService::new(db);
    let slots: Vec<String> = service
        .candidate_slots(court.id, monday())
        .await?
        .map(format_minutes)
        .collect();

    assert_eq!(slots, vec!["09:00", "10:00"]);

    Ok(())
}
