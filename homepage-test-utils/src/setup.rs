/// Create a [`TestContext`](crate::TestContext) with tables for the given entities.
///
/// Without arguments the database is left empty.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Account)?;
/// ```
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let test = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            test.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(test)
        }.await
    }};
}
