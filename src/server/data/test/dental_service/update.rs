use super::*;

/// Tests renaming a service to a name already in use.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_taken_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DentalService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = DentalServiceRepository::new(db);
    repo.create(service_param("Teeth Cleaning")).await?;
    let other = repo.create(service_param("Root Canal")).await?;

    let result = repo
        .update(UpdateDentalServiceParam {
            id: other.id,
            name: Some("Teeth Cleaning".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a partial service update.
///
/// Expected: new price and category, name unchanged
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DentalService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = DentalServiceRepository::new(db);
    let service = repo.create(service_param("Teeth Cleaning")).await?;

    let updated = repo
        .update(UpdateDentalServiceParam {
            id: service.id,
            category: Some(ServiceCategory::Specialty),
            price: Some(120.0),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Teeth Cleaning");
    assert_eq!(updated.category, ServiceCategory::Specialty);
    assert_eq!(updated.price, Some(120.0));

    Ok(())
}
