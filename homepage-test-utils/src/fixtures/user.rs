use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_CREDENTIAL_PROVIDER_ID, TEST_USER_NAME},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user without any account
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                name: ActiveValue::Set(TEST_USER_NAME.to_string()),
                email: ActiveValue::Set(email.to_string()),
                email_verified: ActiveValue::Set(false),
                image: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a credential account holding a hash of `password` for an existing user
    pub async fn insert_credential(
        &self,
        user_id: i32,
        password: &str,
    ) -> Result<entity::account::Model, TestError> {
        // Minimum cost keeps fixture hashing fast
        let hash = bcrypt::hash(password, TEST_BCRYPT_COST)?;
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                account_id: ActiveValue::Set(user_id.to_string()),
                provider_id: ActiveValue::Set(TEST_CREDENTIAL_PROVIDER_ID.to_string()),
                user_id: ActiveValue::Set(user_id),
                password: ActiveValue::Set(Some(hash)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert a user who can sign in with `email` and `password`
    pub async fn insert_credential_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(entity::user::Model, entity::account::Model), TestError> {
        let user = self.insert_user(email).await?;
        let account = self.insert_credential(user.id, password).await?;

        Ok((user, account))
    }
}
