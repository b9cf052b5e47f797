use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Provider ID of accounts that sign in with email and password
pub static CREDENTIAL_PROVIDER_ID: &str = "credential";

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the credential account holding the user's password hash
    pub async fn create_credential(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let account = entity::account::ActiveModel {
            account_id: ActiveValue::Set(user_id.to_string()),
            provider_id: ActiveValue::Set(CREDENTIAL_PROVIDER_ID.to_string()),
            user_id: ActiveValue::Set(user_id),
            password: ActiveValue::Set(Some(password_hash)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get_credential_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::UserId.eq(user_id))
            .filter(entity::account::Column::ProviderId.eq(CREDENTIAL_PROVIDER_ID))
            .one(self.db)
            .await
    }
}
