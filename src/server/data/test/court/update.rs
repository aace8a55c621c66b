use super::*;

/// Tests updating only the surface of a court.
///
/// Expected: Ok(Some) with name unchanged and surface replaced
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::court::CourtFactory::new(db)
        .name("Central")
        .build()
        .await?;

    let repo = CourtRepository::new(db);
    let updated = repo
        .update(UpdateCourtParams {
            id: court.id,
            name: None,
            surface: Some("Sintetico".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Central");
    assert_eq!(updated.surface, "Sintetico");

    Ok(())
}

/// Tests updating a court that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_court() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourtRepository::new(db);
    let result = repo
        .update(UpdateCourtParams {
            id: 999,
            name: Some("Ghost".to_string()),
            surface: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
