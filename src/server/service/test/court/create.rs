use super::*;

/// Tests creating a court without a surface.
///
/// Expected: Ok(Court) with the default surface
#[tokio::test]
async fn applies_default_surface() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourtService::new(db);
    let court = service
        .create(CreateCourtParams::from_dto(CreateCourtDto {
            name: " Central ".to_string(),
            surface: None,
        }))
        .await?;

    assert_eq!(court.name, "Central");
    assert_eq!(court.surface, "Cemento");

    Ok(())
}

/// Tests creating a court with a name already in use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::court::CourtFactory::new(db)
        .name("Central")
        .build()
        .await?;

    let service = CourtService::new(db);
    let result = service
        .create(CreateCourtParams {
            name: "Central".to_string(),
            surface: "Cesped".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a court with a blank name.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_court_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourtService::new(db);
    let result = service
        .create(CreateCourtParams::from_dto(CreateCourtDto {
            name: "   ".to_string(),
            surface: None,
        }))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
