use super::*;

/// Expect Ok when creating a store with an address
#[tokio::test]
async fn creates_store_with_address() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let region = test.catalog().insert_region("North").await?;
    let network = test.catalog().insert_network("Corner Mart", region.id).await?;

    let store = StoreRepository::new(&test.db)
        .create("12", Some("3 Oak Road"), network.id)
        .await
        .unwrap();

    assert_eq!(store.number, "12");
    assert_eq!(store.address.as_deref(), Some("3 Oak Road"));
    assert_eq!(store.network_id, network.id);

    Ok(())
}

/// Expect Ok when creating a store without an address
#[tokio::test]
async fn creates_store_without_address() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let region = test.catalog().insert_region("North").await?;
    let network = test.catalog().insert_network("Corner Mart", region.id).await?;

    let store = StoreRepository::new(&test.db)
        .create("12", None, network.id)
        .await
        .unwrap();

    assert_eq!(store.address, None);

    Ok(())
}
