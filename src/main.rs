use std::time::Duration;

use homepage::server::{
    config::Config, data::session::DatabaseSessionStore, error::Error, router, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let session_store = DatabaseSessionStore::new(db.clone());
    startup::start_session_cleanup(
        session_store.clone(),
        Duration::from_secs(config.session_cleanup_interval_secs),
    );
    let session = startup::build_session_layer(session_store, &config);

    let state = startup::build_state(db, &config);
    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
