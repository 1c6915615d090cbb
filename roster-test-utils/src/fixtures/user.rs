use sea_orm::{EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_mock_user(&self, cpf: &str) -> Result<entity::user::Model, TestError> {
        let user = factory::mock_user_model(cpf);

        entity::prelude::User::insert(user.clone().into_active_model())
            .exec(&self.test.db)
            .await?;

        Ok(user)
    }
}
