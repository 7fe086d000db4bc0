use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(User::Fullname).string().not_null())
                    .col(
                        ColumnDef::new(User::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::Role).integer().not_null())
                    .col(ColumnDef::new(User::PasswordHash).string().not_null())
                    .col(ColumnDef::new(User::SecondFactor).string().null())
                    .col(
                        ColumnDef::new(User::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(User::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tag::Table)
                    .col(
                        ColumnDef::new(Tag::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tag::Title).string().not_null())
                    .col(ColumnDef::new(Tag::Color).string().null())
                    .col(ColumnDef::new(Tag::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Tag::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tag::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tag::Table, Tag::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApiClient::Table)
                    .col(
                        ColumnDef::new(ApiClient::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApiClient::AppName).string().not_null())
                    .col(ColumnDef::new(ApiClient::AppPublisher).string().not_null())
                    .col(ColumnDef::new(ApiClient::RedirectUrl).string().null())
                    .col(
                        ColumnDef::new(ApiClient::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ApiClient::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ApiClient::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(ApiClient::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApiClient::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApiClient::Table, ApiClient::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApiToken::Table)
                    .col(
                        ColumnDef::new(ApiToken::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApiToken::Title).string().not_null())
                    .col(
                        ColumnDef::new(ApiToken::Token)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ApiToken::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ApiToken::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ApiToken::ApiClientId).integer().null())
                    .col(ColumnDef::new(ApiToken::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(ApiToken::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApiToken::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApiToken::Table, ApiToken::ApiClientId)
                            .to(ApiClient::Table, ApiClient::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApiToken::Table, ApiToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApiScope::Table)
                    .col(
                        ColumnDef::new(ApiScope::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ApiScope::Module).string().not_null())
                    .col(ColumnDef::new(ApiScope::Subject).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_api_scope_module_subject")
                    .table(ApiScope::Table)
                    .col(ApiScope::Module)
                    .col(ApiScope::Subject)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ApiTokenScope::Table)
                    .col(
                        ColumnDef::new(ApiTokenScope::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApiTokenScope::ApiTokenId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ApiTokenScope::ApiScopeId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApiTokenScope::Table, ApiTokenScope::ApiTokenId)
                            .to(ApiToken::Table, ApiToken::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ApiTokenScope::Table, ApiTokenScope::ApiScopeId)
                            .to(ApiScope::Table, ApiScope::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSetting::Table)
                    .col(
                        ColumnDef::new(UserSetting::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserSetting::Setting).string().not_null())
                    .col(ColumnDef::new(UserSetting::Value).string().not_null())
                    .col(ColumnDef::new(UserSetting::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(UserSetting::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserSetting::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserSetting::Table, UserSetting::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TemporaryToken::Table)
                    .col(
                        ColumnDef::new(TemporaryToken::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TemporaryToken::Token)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(TemporaryToken::TokenType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TemporaryToken::Expires)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TemporaryToken::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TemporaryToken::Created)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TemporaryToken::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TemporaryToken::Table, TemporaryToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            TemporaryToken::Table.into_iden(),
            UserSetting::Table.into_iden(),
            ApiTokenScope::Table.into_iden(),
            ApiScope::Table.into_iden(),
            ApiToken::Table.into_iden(),
            ApiClient::Table.into_iden(),
            Tag::Table.into_iden(),
            User::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Fullname,
    Username,
    Email,
    Role,
    PasswordHash,
    SecondFactor,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum Tag {
    Table,
    Id,
    Title,
    Color,
    UserId,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum ApiClient {
    Table,
    Id,
    AppName,
    AppPublisher,
    RedirectUrl,
    Enabled,
    Expires,
    UserId,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum ApiToken {
    Table,
    Id,
    Title,
    Token,
    Enabled,
    Expires,
    ApiClientId,
    UserId,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum ApiScope {
    Table,
    Id,
    Module,
    Subject,
}

#[derive(DeriveIden)]
enum ApiTokenScope {
    Table,
    Id,
    ApiTokenId,
    ApiScopeId,
}

#[derive(DeriveIden)]
enum UserSetting {
    Table,
    Id,
    Setting,
    Value,
    UserId,
    Created,
    Updated,
}

#[derive(DeriveIden)]
enum TemporaryToken {
    Table,
    Id,
    Token,
    TokenType,
    Expires,
    UserId,
    Created,
    Updated,
}
