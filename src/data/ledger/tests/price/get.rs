use super::*;

/// Expect None for a key without a capture
#[tokio::test]
async fn returns_none_without_record() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::PriceRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;

    let record = PriceRepository::new(&test.db)
        .get(store.id, "Bread", date(2024, 1, 1))
        .await
        .unwrap();

    assert!(record.is_none());

    Ok(())
}

/// Expect the exact key's record back, not a neighbor's
#[tokio::test]
async fn matches_full_key() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::PriceRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);
    test.ledger()
        .insert_price(store.id, "Bread", check_date, Some(42.5), None, false, None)
        .await?;
    test.ledger()
        .insert_price(store.id, "Milk", check_date, Some(30.0), None, false, None)
        .await?;

    let record = PriceRepository::new(&test.db)
        .get(store.id, "Bread", check_date)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.product_name, "Bread");
    assert_eq!(record.regular_price, Some(42.5));

    Ok(())
}
