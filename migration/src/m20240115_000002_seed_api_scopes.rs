use sea_orm_migration::prelude::*;

/// The fixed set of permission units known to the service.
const SCOPES: &[(&str, &str)] = &[
    ("users", "create"),
    ("users", "retrieve"),
    ("users", "update"),
    ("users", "delete"),
    ("tags", "create"),
    ("tags", "retrieve"),
    ("tags", "update"),
    ("tags", "delete"),
    ("api_clients", "create"),
    ("api_clients", "retrieve"),
    ("api_clients", "update"),
    ("api_clients", "delete"),
    ("api_tokens", "retrieve"),
    ("api_tokens", "delete"),
    ("user_settings", "create"),
    ("user_settings", "retrieve"),
    ("user_settings", "update"),
    ("user_settings", "delete"),
    ("account", "reset_password"),
    ("account", "update_second_factor"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(ApiScope::Table)
            .columns([ApiScope::Module, ApiScope::Subject])
            .to_owned();
        for (module, subject) in SCOPES {
            insert.values_panic([(*module).into(), (*subject).into()]);
        }
        manager.exec_stmt(insert).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(ApiScope::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum ApiScope {
    Table,
    Module,
    Subject,
}
