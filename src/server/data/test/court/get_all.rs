use super::*;

/// Tests listing courts in ID order.
///
/// Expected: Ok with every court, lowest ID first
#[tokio::test]
async fn returns_courts_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_court(db).await?;
    let second = factory::create_court(db).await?;

    let repo = CourtRepository::new(db);
    let courts = repo.get_all().await?;

    assert_eq!(courts.len(), 2);
    assert_eq!(courts[0].id, first.id);
    assert_eq!(courts[1].id, second.id);

    Ok(())
}

/// Tests listing when no court exists.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_without_courts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourtRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
