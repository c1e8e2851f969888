use super::*;

/// Expect the most recent capture to win across stores, not iteration order.
/// The legacy lookup returned whichever store happened to be visited first;
/// this pins the recency-based behavior.
#[tokio::test]
async fn picks_latest_date_across_network_stores() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::PriceRecord)?;
    let (_, network, early_store) = test.catalog().insert_store_tree("1").await?;
    let late_store = test.catalog().insert_store("2", None, network.id).await?;
    test.ledger()
        .insert_price(early_store.id, "Bread", date(2024, 1, 1), Some(40.0), None, false, None)
        .await?;
    test.ledger()
        .insert_price(late_store.id, "Bread", date(2024, 1, 5), Some(45.0), None, false, None)
        .await?;

    let record = PriceRepository::new(&test.db)
        .get_last_in_network(network.id, "Bread")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.store_id, late_store.id);
    assert_eq!(record.regular_price, Some(45.0));

    Ok(())
}

/// Expect a same-date tie to break toward the lowest store id
#[tokio::test]
async fn breaks_date_ties_by_store_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::PriceRecord)?;
    let (_, network, first_store) = test.catalog().insert_store_tree("1").await?;
    let second_store = test.catalog().insert_store("2", None, network.id).await?;
    let check_date = date(2024, 1, 1);
    test.ledger()
        .insert_price(second_store.id, "Bread", check_date, Some(45.0), None, false, None)
        .await?;
    test.ledger()
        .insert_price(first_store.id, "Bread", check_date, Some(40.0), None, false, None)
        .await?;

    let record = PriceRepository::new(&test.db)
        .get_last_in_network(network.id, "Bread")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.store_id, first_store.id);

    Ok(())
}

/// Expect captures in other networks to be invisible
#[tokio::test]
async fn ignores_other_networks() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::PriceRecord)?;
    let (region, network, _) = test.catalog().insert_store_tree("1").await?;
    let other_network = test.catalog().insert_network("Baseline", region.id).await?;
    let other_store = test.catalog().insert_store("9", None, other_network.id).await?;
    test.ledger()
        .insert_price(other_store.id, "Bread", date(2024, 1, 1), Some(40.0), None, false, None)
        .await?;

    let record = PriceRepository::new(&test.db)
        .get_last_in_network(network.id, "Bread")
        .await
        .unwrap();

    assert!(record.is_none());

    Ok(())
}

/// Expect None when the product has no captures anywhere in the network
#[tokio::test]
async fn returns_none_for_unknown_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::PriceRecord)?;
    let (_, network, store) = test.catalog().insert_store_tree("1").await?;
    test.ledger()
        .insert_price(store.id, "Milk", date(2024, 1, 1), Some(30.0), None, false, None)
        .await?;

    let record = PriceRepository::new(&test.db)
        .get_last_in_network(network.id, "Bread")
        .await
        .unwrap();

    assert!(record.is_none());

    Ok(())
}
