use super::*;

/// Expect product names back sorted alphabetically
#[tokio::test]
async fn returns_products_sorted_alphabetically() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (_, _, store) = test.catalog().insert_store_tree("12").await?;
    test.catalog()
        .insert_nomenclature(store.id, &["Milk", "Bread", "Eggs"])
        .await?;

    let products = NomenclatureRepository::new(&test.db)
        .list_products(store.id)
        .await
        .unwrap();

    assert_eq!(products, vec!["Bread", "Eggs", "Milk"]);

    Ok(())
}

/// Expect an empty list for an unknown store, not an error
#[tokio::test]
async fn returns_empty_list_for_unknown_store() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let products = NomenclatureRepository::new(&test.db)
        .list_products(999)
        .await
        .unwrap();

    assert!(products.is_empty());

    Ok(())
}

/// Expect only the requested store's products back
#[tokio::test]
async fn scopes_products_to_store() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let (_, network, store) = test.catalog().insert_store_tree("12").await?;
    let other_store = test.catalog().insert_store("15", None, network.id).await?;
    test.catalog().insert_nomenclature(store.id, &["Bread"]).await?;
    test.catalog()
        .insert_nomenclature(other_store.id, &["Butter"])
        .await?;

    let products = NomenclatureRepository::new(&test.db)
        .list_products(store.id)
        .await
        .unwrap();

    assert_eq!(products, vec!["Bread"]);

    Ok(())
}
