//! Process-wide API bundle.
//!
//! The bundle is constructed once at startup from the shared dependencies and cloned into
//! every request context. It is never mutated after construction.

use sea_orm::DatabaseConnection;

/// Dependencies required to build the [`Api`].
pub struct ApiDeps {
    pub db: DatabaseConnection,
}

/// Services injected into every request context.
///
/// Empty for now; new services get a field here and are constructed in [`create_api`]
/// from the shared dependencies.
#[derive(Clone, Debug, Default)]
pub struct Services {}

/// Shared database handle and injected services.
#[derive(Clone, Debug)]
pub struct Api {
    pub db: DatabaseConnection,
    pub services: Services,
}

/// Builds the API bundle from its dependencies.
pub fn create_api(deps: ApiDeps) -> Api {
    let ApiDeps { db } = deps;

    let services = Services::default();

    Api { db, services }
}
