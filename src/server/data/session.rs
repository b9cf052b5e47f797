//! Database-backed store for tower-sessions records.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use time::OffsetDateTime;
use tower_sessions::{
    session::{Id, Record},
    session_store::{self, SessionStore},
};

/// Persists session records in the `session` table.
///
/// Record data is stored as JSON text and the expiry as unix seconds. Expired records are
/// never returned by [`SessionStore::load`], so an expired cookie resolves to a fresh,
/// empty session. [`DatabaseSessionStore::delete_expired`] removes them from the table.
#[derive(Clone, Debug)]
pub struct DatabaseSessionStore {
    db: DatabaseConnection,
}

impl DatabaseSessionStore {
    /// Creates a new instance of [`DatabaseSessionStore`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn exists(&self, session_id: &Id) -> Result<bool, DbErr> {
        let record = entity::prelude::Session::find_by_id(session_id.to_string())
            .one(&self.db)
            .await?;

        Ok(record.is_some())
    }

    /// Deletes every record whose expiry has passed, returning how many were removed
    pub async fn delete_expired(&self) -> Result<u64, DbErr> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn backend_error(err: DbErr) -> session_store::Error {
    session_store::Error::Backend(err.to_string())
}

#[async_trait]
impl SessionStore for DatabaseSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.exists(&record.id).await.map_err(backend_error)? {
            record.id = Id::default();
        }

        self.save(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        let data = serde_json::to_string(&record.data)
            .map_err(|e| session_store::Error::Encode(e.to_string()))?;

        let model = entity::session::ActiveModel {
            id: ActiveValue::Set(record.id.to_string()),
            data: ActiveValue::Set(data),
            expires_at: ActiveValue::Set(record.expiry_date.unix_timestamp()),
        };

        entity::prelude::Session::insert(model)
            .on_conflict(
                OnConflict::column(entity::session::Column::Id)
                    .update_columns([
                        entity::session::Column::Data,
                        entity::session::Column::ExpiresAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let Some(model) = entity::prelude::Session::find_by_id(session_id.to_string())
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .map_err(backend_error)?
        else {
            return Ok(None);
        };

        let data = serde_json::from_str(&model.data)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;
        let expiry_date = OffsetDateTime::from_unix_timestamp(model.expires_at)
            .map_err(|e| session_store::Error::Decode(e.to_string()))?;

        Ok(Some(Record {
            id: *session_id,
            data,
            expiry_date,
        }))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        entity::prelude::Session::delete_by_id(session_id.to_string())
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        Ok(())
    }
}
