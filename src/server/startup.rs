use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    api::{create_api, ApiDeps},
    config::Config,
    data::session::DatabaseSessionStore,
    error::Error,
    model::app::AppState,
};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Configure cookie session management on top of the database session store
pub fn build_session_layer(
    store: DatabaseSessionStore,
    config: &Config,
) -> SessionManagerLayer<DatabaseSessionStore> {
    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_expiry_days,
        )))
}

/// Spawn the task that periodically deletes expired sessions
pub fn start_session_cleanup(store: DatabaseSessionStore, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);

        loop {
            interval.tick().await;

            match store.delete_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!("Deleted {} expired sessions", removed),
                Err(err) => tracing::error!("Failed to delete expired sessions: {}", err),
            }
        }
    })
}

/// Build the state shared by all request handlers
pub fn build_state(db: DatabaseConnection, config: &Config) -> AppState {
    AppState {
        api: create_api(ApiDeps { db }),
        trusted_origin: config.cors_origin.clone(),
    }
}
