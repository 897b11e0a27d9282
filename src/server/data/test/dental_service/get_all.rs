use super::*;

/// Tests filtering the catalog by category.
///
/// Expected: only cosmetic services, ordered by name
#[tokio::test]
async fn filters_by_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DentalService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::dental_service::DentalServiceFactory::new(db)
        .name("Whitening")
        .category("Cosmetic")
        .build()
        .await?;
    factory::dental_service::DentalServiceFactory::new(db)
        .name("Veneers")
        .category("Cosmetic")
        .build()
        .await?;
    factory::dental_service::DentalServiceFactory::new(db)
        .name("Checkup")
        .category("General")
        .build()
        .await?;

    let services = DentalServiceRepository::new(db)
        .get_all(DentalServiceFilter {
            category: Some(ServiceCategory::Cosmetic),
            is_active: None,
        })
        .await?;

    let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Veneers", "Whitening"]);

    Ok(())
}

/// Tests filtering out inactive services.
///
/// Expected: only the active service
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DentalService)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let active = factory::create_dental_service(db).await?;
    factory::dental_service::DentalServiceFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let services = DentalServiceRepository::new(db)
        .get_all(DentalServiceFilter {
            category: None,
            is_active: Some(true),
        })
        .await?;

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].id, active.id);

    Ok(())
}
