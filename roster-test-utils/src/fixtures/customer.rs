use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn customer<'a>(&'a mut self) -> CustomerFixtures<'a> {
        CustomerFixtures { test: self }
    }
}

pub struct CustomerFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> CustomerFixtures<'a> {
    pub async fn insert_mock_customer(
        &self,
        name: &str,
    ) -> Result<entity::customer::Model, TestError> {
        let customer = factory::mock_customer_model(name);

        entity::prelude::Customer::insert(customer.clone().into_active_model())
            .exec(&self.test.db)
            .await?;

        Ok(customer)
    }

    pub async fn insert_mock_customer_with_addresses(
        &self,
        name: &str,
        address_count: usize,
    ) -> Result<
        (
            entity::customer::Model,
            Vec<entity::customer_address::Model>,
        ),
        TestError,
    > {
        let customer = self.insert_mock_customer(name).await?;

        let addresses: Vec<entity::customer_address::Model> = (0..address_count)
            .map(|index| factory::mock_customer_address_model(customer.id, index))
            .collect();

        if !addresses.is_empty() {
            entity::prelude::CustomerAddress::insert_many(
                addresses
                    .iter()
                    .cloned()
                    .map(entity::customer_address::ActiveModel::from),
            )
            .exec(&self.test.db)
            .await?;
        }

        Ok((customer, addresses))
    }
}
