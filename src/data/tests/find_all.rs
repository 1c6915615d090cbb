//! Tests for EntityRepository::find_all across filters, sorting, pagination and includes.

use super::*;

/// Expect every row without options
#[tokio::test]
async fn finds_all_without_options() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Employee)?;
    test.employee()
        .insert_mock_employees_named(Uuid::new_v4(), &[10.0, 20.0, 30.0])
        .await?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository.find_all(FindOptions::new()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().len(), 3);

    Ok(())
}

/// Expect page 2 of size 5 sorted by name to hold ranks 6 through 10
#[tokio::test]
async fn paginates_sorted_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Employee)?;
    test.employee()
        .insert_mock_employees_named(Uuid::new_v4(), &[10.0; 12])
        .await?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository
        .find_all(FindOptions::new().limits(QueryLimits::new(2, 5, "name", Direction::Ascending)))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let names: Vec<String> = result
        .unwrap()
        .into_iter()
        .map(|employee| employee.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Employee 06",
            "Employee 07",
            "Employee 08",
            "Employee 09",
            "Employee 10"
        ]
    );

    Ok(())
}

/// Expect the last partial page to hold only the remaining rows
#[tokio::test]
async fn returns_partial_last_page() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Employee)?;
    test.employee()
        .insert_mock_employees_named(Uuid::new_v4(), &[10.0; 12])
        .await?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository
        .find_all(FindOptions::new().order_by(OrderBy::desc("name")).page(3, 5))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let names: Vec<String> = result
        .unwrap()
        .into_iter()
        .map(|employee| employee.name)
        .collect();
    assert_eq!(names, vec!["Employee 02", "Employee 01"]);

    Ok(())
}

/// Expect typed and raw filters to combine so every filter must match
#[tokio::test]
async fn combines_typed_and_raw_filters() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::Employee)?;
    let office_id = Uuid::new_v4();
    test.employee()
        .insert_mock_employees_named(office_id, &[10.0, 20.0, 30.0, 40.0])
        .await?;
    test.employee()
        .insert_mock_employee(Uuid::new_v4(), 35.0)
        .await?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository
        .find_all(
            FindOptions::new()
                .filter(entity::employee::Column::OfficeId.eq(office_id))
                .raw_filter("salary >= 20")
                .order_by(OrderBy::column(
                    entity::employee::Column::Salary,
                    Direction::Descending,
                )),
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let salaries: Vec<f64> = result
        .unwrap()
        .into_iter()
        .map(|employee| employee.salary)
        .collect();
    assert_eq!(salaries, vec![40.0, 30.0, 20.0]);

    Ok(())
}

/// Expect nested properties only when included
#[tokio::test]
async fn includes_nested_properties_on_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .with_mock_customer("Ada", 2)
        .build()
        .await?;

    let repository = EntityRepository::<Customer, _>::new(&test.db);
    let without = repository.find_all(FindOptions::new()).await;
    let with = repository
        .find_all(FindOptions::new().include(Customer::ADDRESSES))
        .await;

    assert!(without.is_ok(), "Error: {:?}", without);
    assert!(with.is_ok(), "Error: {:?}", with);
    assert!(without.unwrap()[0].addresses.is_none());
    assert_eq!(with.unwrap()[0].addresses.as_ref().map(Vec::len), Some(2));

    Ok(())
}

/// Expect every customer on a page to receive only its own addresses
#[tokio::test]
async fn includes_nested_properties_per_entity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_customer_tables()
        .with_mock_customer("Ada", 1)
        .with_mock_customer("Bea", 0)
        .with_mock_customer("Cy", 3)
        .build()
        .await?;

    let repository = EntityRepository::<Customer, _>::new(&test.db);
    let result = repository
        .find_all(
            FindOptions::new()
                .order_by(OrderBy::asc("name"))
                .include(Customer::ADDRESSES),
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let counts: Vec<(String, Option<usize>)> = result
        .unwrap()
        .into_iter()
        .map(|customer| (customer.name, customer.addresses.map(|a| a.len())))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Ada".to_string(), Some(1)),
            ("Bea".to_string(), Some(0)),
            ("Cy".to_string(), Some(3)),
        ]
    );

    Ok(())
}

/// Expect UnknownProperty when sorting by a property the entity does not have
#[tokio::test]
async fn fails_for_unknown_sort_property() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Employee)?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository
        .find_all(FindOptions::new().order_by(OrderBy::asc("nickname")))
        .await;

    assert!(matches!(
        result,
        Err(RepositoryError::UnknownProperty { property, .. }) if property == "nickname"
    ));

    Ok(())
}

/// Expect UnknownProperty when including a property that is not nested
#[tokio::test]
async fn fails_for_unknown_include() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Employee)?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository
        .find_all(FindOptions::new().include(Customer::ADDRESSES))
        .await;

    assert!(matches!(
        result,
        Err(RepositoryError::UnknownProperty { .. })
    ));

    Ok(())
}

/// Expect InvalidPage for a zero page number or size
#[tokio::test]
async fn fails_for_zero_page() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Employee)?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let zero_number = repository.find_all(FindOptions::new().page(0, 5)).await;
    let zero_size = repository.find_all(FindOptions::new().page(1, 0)).await;

    assert!(matches!(
        zero_number,
        Err(RepositoryError::InvalidPage { number: 0, size: 5 })
    ));
    assert!(matches!(
        zero_size,
        Err(RepositoryError::InvalidPage { number: 1, size: 0 })
    ));

    Ok(())
}

/// Expect QueryFailed when the database rejects the query
#[tokio::test]
async fn wraps_query_failures() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Employee)?;

    let repository = EntityRepository::<Employee, _>::new(&test.db);
    let result = repository
        .find_all(FindOptions::new().raw_filter("no_such_column = 1"))
        .await;

    assert!(matches!(result, Err(RepositoryError::QueryFailed { .. })));
    assert!(result
        .unwrap_err()
        .to_string()
        .starts_with("It was not possible to find the data"));

    Ok(())
}
