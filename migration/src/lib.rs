pub use sea_orm_migration::prelude::*;

mod m20251019_000001_user;
mod m20251019_000002_account;
mod m20251019_000003_session;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251019_000001_user::Migration),
            Box::new(m20251019_000002_account::Migration),
            Box::new(m20251019_000003_session::Migration),
        ]
    }
}
