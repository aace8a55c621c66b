use super::*;

/// Tests deleting an existing and a missing court.
///
/// Expected: Ok(()) the first time, Err(AppError::NotFound) the second
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let court = factory::create_court(db).await?;

    let service = CourtService::new(db);

    service.delete(court.id).await?;
    assert!(matches!(
        service.delete(court.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
