//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_customer_tables: bool,

    // Database fixtures to insert
    customers: Vec<(String, usize)>, // (name, address_count)
    employees: Vec<(Uuid, f64)>,     // (office_id, salary)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_customer_tables: false,
            customers: Vec::new(),
            employees: Vec::new(),
        }
    }

    /// Add the customer and customer address tables to the test database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_customer_tables(mut self) -> Self {
        self.include_customer_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), roster_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Employee)
    ///     .with_table(User)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock customer into database.
    ///
    /// Requires `with_customer_tables`.
    ///
    /// # Arguments
    /// - `name` - Customer name
    /// - `address_count` - Number of mock addresses to insert for the customer
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_customer(mut self, name: impl Into<String>, address_count: usize) -> Self {
        self.customers.push((name.into(), address_count));
        self
    }

    /// Insert mock employee into database.
    ///
    /// Requires the employee table to be added with `with_table`.
    ///
    /// # Arguments
    /// - `office_id` - Office the employee belongs to
    /// - `salary` - Monthly salary
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_employee(mut self, office_id: Uuid, salary: f64) -> Self {
        self.employees.push((office_id, salary));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (customer tables if specified, then custom tables)
    /// 2. Inserts database fixtures (customers with addresses, employees)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_customer_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Customer),
                schema.create_table_from_entity(entity::prelude::CustomerAddress),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for (name, address_count) in self.customers {
            test.customer()
                .insert_mock_customer_with_addresses(&name, address_count)
                .await?;
        }

        for (office_id, salary) in self.employees {
            test.employee().insert_mock_employee(office_id, salary).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_customer_tables() {
        let result = TestBuilder::new().with_customer_tables().build().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_methods() {
        let result = TestBuilder::new()
            .with_customer_tables()
            .with_table(entity::prelude::Employee)
            .with_mock_customer("Ada", 2)
            .with_mock_employee(Uuid::new_v4(), 25.0)
            .build()
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_fails_without_required_table() {
        let result = TestBuilder::new()
            .with_mock_employee(Uuid::new_v4(), 25.0)
            .build()
            .await;
        assert!(result.is_err());
    }
}
