use super::*;

/// Expect the worked example to hold: Bread checked, Milk missed
#[tokio::test]
async fn records_presence_per_expected_product() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::CheckRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);

    record_checks(
        &test.db,
        store.id,
        products(&["Bread", "Milk"]),
        present(&["Bread"]),
        check_date,
    )
    .await
    .unwrap();

    let checked = CheckRepository::new(&test.db)
        .get_present_products(store.id, check_date)
        .await
        .unwrap();

    assert_eq!(checked, present(&["Bread"]));

    Ok(())
}

/// Expect repeating an identical submission to yield an identical final state
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let test =
        test_setup_with_catalog_tables!(entity::prelude::CheckRecord, entity::prelude::PriceRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);

    for _ in 0..2 {
        record_checks(
            &test.db,
            store.id,
            products(&["Bread", "Milk", "Eggs"]),
            present(&["Bread", "Eggs"]),
            check_date,
        )
        .await
        .unwrap();
    }

    let repo = CheckRepository::new(&test.db);
    let checked = repo.get_present_products(store.id, check_date).await.unwrap();
    assert_eq!(checked, present(&["Bread", "Eggs"]));

    // Exactly one row per expected product survives the second submission.
    let report = crate::report::build_store_report(&test.db, store.id, check_date)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(report.rows.len(), 3);

    Ok(())
}

/// Expect a new submission to replace the prior set, never merge with it
#[tokio::test]
async fn replaces_prior_set_for_date() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::CheckRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);

    record_checks(
        &test.db,
        store.id,
        products(&["A", "B", "C"]),
        present(&["A"]),
        check_date,
    )
    .await
    .unwrap();
    record_checks(
        &test.db,
        store.id,
        products(&["A", "B"]),
        present(&["B"]),
        check_date,
    )
    .await
    .unwrap();

    let checked = CheckRepository::new(&test.db)
        .get_present_products(store.id, check_date)
        .await
        .unwrap();

    // C disappeared with the replacement and A is no longer present.
    assert_eq!(checked, present(&["B"]));

    Ok(())
}

/// Expect present names outside the expected set to be silently ignored
#[tokio::test]
async fn ignores_present_products_outside_expected_set() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::CheckRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);

    record_checks(
        &test.db,
        store.id,
        products(&["Bread"]),
        present(&["Bread", "Caviar"]),
        check_date,
    )
    .await
    .unwrap();

    let checked = CheckRepository::new(&test.db)
        .get_present_products(store.id, check_date)
        .await
        .unwrap();

    assert_eq!(checked, present(&["Bread"]));

    Ok(())
}

/// Expect an empty expected list to clear all records for the store and date
#[tokio::test]
async fn empty_expected_list_clears_records() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::CheckRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);

    record_checks(
        &test.db,
        store.id,
        products(&["Bread"]),
        present(&["Bread"]),
        check_date,
    )
    .await
    .unwrap();
    record_checks(&test.db, store.id, Vec::new(), HashSet::new(), check_date)
        .await
        .unwrap();

    let repo = CheckRepository::new(&test.db);
    assert!(repo
        .get_present_products(store.id, check_date)
        .await
        .unwrap()
        .is_empty());
    assert!(!repo
        .get_checked_store_ids(check_date)
        .await
        .unwrap()
        .contains(&store.id));

    Ok(())
}

/// Expect submissions for other dates and stores to be untouched
#[tokio::test]
async fn leaves_other_dates_and_stores_alone() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::CheckRecord)?;
    let (_, network, store) = test.catalog().insert_store_tree("1").await?;
    let other_store = test.catalog().insert_store("2", None, network.id).await?;
    let first = date(2024, 1, 1);
    let second = date(2024, 1, 2);

    record_checks(&test.db, store.id, products(&["Bread"]), present(&["Bread"]), first)
        .await
        .unwrap();
    record_checks(
        &test.db,
        other_store.id,
        products(&["Milk"]),
        present(&["Milk"]),
        first,
    )
    .await
    .unwrap();
    record_checks(&test.db, store.id, products(&["Eggs"]), present(&[]), second)
        .await
        .unwrap();

    let repo = CheckRepository::new(&test.db);
    assert_eq!(
        repo.get_present_products(store.id, first).await.unwrap(),
        present(&["Bread"])
    );
    assert_eq!(
        repo.get_present_products(other_store.id, first).await.unwrap(),
        present(&["Milk"])
    );

    Ok(())
}

/// Expect ValidationError for a blank product name, with nothing written
#[tokio::test]
async fn rejects_blank_product_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!(entity::prelude::CheckRecord)?;
    let (_, _, store) = test.catalog().insert_store_tree("1").await?;
    let check_date = date(2024, 1, 1);

    let result = record_checks(
        &test.db,
        store.id,
        products(&["Bread", "  "]),
        present(&["Bread"]),
        check_date,
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::BlankProductName))
    ));
    assert!(CheckRepository::new(&test.db)
        .get_checked_store_ids(check_date)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Expect Error with prior state intact when the ledger table is missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = record_checks(
        &test.db,
        1,
        products(&["Bread"]),
        present(&["Bread"]),
        date(2024, 1, 1),
    )
    .await;

    assert!(result.is_err());

    Ok(())
}
