//! Bindings of the data model entities to the resource engine.

use chrono::Utc;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Set};

use super::{ApiResource, FieldKind, NeededScopes, WritableResource};
use crate::types::error::AppError;
use crate::types::resource::{
    ApiClientResource, ApiClientResourceIn, ApiTokenResource, TagResource, TagResourceIn,
    UserResource, UserResourceIn, UserSettingResource, UserSettingResourceIn,
};
use my_model::user::UserRole;

impl ApiResource for my_model::user::Entity {
    const NEEDED_SCOPES: NeededScopes = NeededScopes {
        create: Some("users.create"),
        retrieve: Some("users.retrieve"),
        update: Some("users.update"),
        delete: Some("users.delete"),
    };
    const FILTER_FIELDS: &'static [&'static str] = &["id", "username", "fullname", "email"];
    const SORT_FIELDS: &'static [&'static str] =
        &["id", "username", "fullname", "email", "role", "created"];

    type Output = UserResource;

    fn column_for(field: &str) -> Option<(Self::Column, FieldKind)> {
        use my_model::user::Column;
        match field {
            "id" => Some((Column::Id, FieldKind::Int)),
            "username" => Some((Column::Username, FieldKind::Str)),
            "fullname" => Some((Column::Fullname, FieldKind::Str)),
            "email" => Some((Column::Email, FieldKind::Str)),
            "role" => Some((Column::Role, FieldKind::Int)),
            "created" => Some((Column::Created, FieldKind::Int)),
            _ => None,
        }
    }

    fn id_column() -> Self::Column {
        my_model::user::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    /// Root accounts manage all users; everyone else only sees themselves.
    fn ownership(user: &my_model::user::Model) -> Option<SimpleExpr> {
        match user.role {
            UserRole::Root => None,
            _ => Some(my_model::user::Column::Id.eq(user.id)),
        }
    }
}

impl WritableResource for my_model::user::Entity {
    type Input = UserResourceIn;

    fn validate(input: &Self::Input) -> Result<(), AppError> {
        input.validate()
    }

    fn create_model(input: Self::Input, _user: &my_model::user::Model) -> Self::ActiveModel {
        let now = Utc::now();
        my_model::user::ActiveModel {
            fullname: Set(input.fullname),
            username: Set(input.username),
            email: Set(input.email),
            role: Set(input.role),
            // New accounts cannot log in until a password reset assigns one.
            password_hash: Set(String::new()),
            second_factor: Set(None),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
    }

    fn update_model(existing: Self::Model, input: Self::Input) -> Self::ActiveModel {
        let mut model: my_model::user::ActiveModel = existing.into();
        model.fullname = Set(input.fullname);
        model.username = Set(input.username);
        model.email = Set(input.email);
        model.role = Set(input.role);
        model.updated = Set(Utc::now());
        model
    }
}

impl ApiResource for my_model::tag::Entity {
    const NEEDED_SCOPES: NeededScopes = NeededScopes {
        create: Some("tags.create"),
        retrieve: Some("tags.retrieve"),
        update: Some("tags.update"),
        delete: Some("tags.delete"),
    };
    const FILTER_FIELDS: &'static [&'static str] = &["id", "title", "color"];
    const SORT_FIELDS: &'static [&'static str] = &["id", "color", "title"];

    type Output = TagResource;

    fn column_for(field: &str) -> Option<(Self::Column, FieldKind)> {
        use my_model::tag::Column;
        match field {
            "id" => Some((Column::Id, FieldKind::Int)),
            "title" => Some((Column::Title, FieldKind::Str)),
            "color" => Some((Column::Color, FieldKind::Str)),
            _ => None,
        }
    }

    fn id_column() -> Self::Column {
        my_model::tag::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn ownership(user: &my_model::user::Model) -> Option<SimpleExpr> {
        Some(my_model::tag::Column::UserId.eq(user.id))
    }
}

impl WritableResource for my_model::tag::Entity {
    type Input = TagResourceIn;

    fn validate(input: &Self::Input) -> Result<(), AppError> {
        input.validate()
    }

    fn create_model(input: Self::Input, user: &my_model::user::Model) -> Self::ActiveModel {
        let now = Utc::now();
        my_model::tag::ActiveModel {
            title: Set(input.title),
            color: Set(input.color),
            user_id: Set(user.id),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
    }

    fn update_model(existing: Self::Model, input: Self::Input) -> Self::ActiveModel {
        let mut model: my_model::tag::ActiveModel = existing.into();
        model.title = Set(input.title);
        model.color = Set(input.color);
        model.updated = Set(Utc::now());
        model
    }
}

impl ApiResource for my_model::api_client::Entity {
    const NEEDED_SCOPES: NeededScopes = NeededScopes {
        create: Some("api_clients.create"),
        retrieve: Some("api_clients.retrieve"),
        update: Some("api_clients.update"),
        delete: Some("api_clients.delete"),
    };
    const FILTER_FIELDS: &'static [&'static str] = &["id", "app_name", "app_publisher"];
    const SORT_FIELDS: &'static [&'static str] = &["id", "app_name", "app_publisher"];

    type Output = ApiClientResource;

    fn column_for(field: &str) -> Option<(Self::Column, FieldKind)> {
        use my_model::api_client::Column;
        match field {
            "id" => Some((Column::Id, FieldKind::Int)),
            "app_name" => Some((Column::AppName, FieldKind::Str)),
            "app_publisher" => Some((Column::AppPublisher, FieldKind::Str)),
            _ => None,
        }
    }

    fn id_column() -> Self::Column {
        my_model::api_client::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn ownership(user: &my_model::user::Model) -> Option<SimpleExpr> {
        Some(my_model::api_client::Column::UserId.eq(user.id))
    }
}

impl WritableResource for my_model::api_client::Entity {
    type Input = ApiClientResourceIn;

    fn validate(input: &Self::Input) -> Result<(), AppError> {
        input.validate()
    }

    fn create_model(input: Self::Input, user: &my_model::user::Model) -> Self::ActiveModel {
        let now = Utc::now();
        my_model::api_client::ActiveModel {
            app_name: Set(input.app_name),
            app_publisher: Set(input.app_publisher),
            redirect_url: Set(input.redirect_url),
            enabled: Set(input.enabled),
            expires: Set(input.expires),
            user_id: Set(user.id),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
    }

    fn update_model(existing: Self::Model, input: Self::Input) -> Self::ActiveModel {
        let mut model: my_model::api_client::ActiveModel = existing.into();
        model.app_name = Set(input.app_name);
        model.app_publisher = Set(input.app_publisher);
        model.redirect_url = Set(input.redirect_url);
        model.enabled = Set(input.enabled);
        model.expires = Set(input.expires);
        model.updated = Set(Utc::now());
        model
    }
}

/// API tokens are retrieve/delete only; they are created through the
/// authentication flows, not through the resources API.
impl ApiResource for my_model::api_token::Entity {
    const NEEDED_SCOPES: NeededScopes = NeededScopes {
        create: None,
        retrieve: Some("api_tokens.retrieve"),
        update: None,
        delete: Some("api_tokens.delete"),
    };
    const FILTER_FIELDS: &'static [&'static str] = &["id", "title", "api_client_id"];
    const SORT_FIELDS: &'static [&'static str] = &["id", "title", "created", "expires"];

    type Output = ApiTokenResource;

    fn column_for(field: &str) -> Option<(Self::Column, FieldKind)> {
        use my_model::api_token::Column;
        match field {
            "id" => Some((Column::Id, FieldKind::Int)),
            "title" => Some((Column::Title, FieldKind::Str)),
            "api_client_id" => Some((Column::ApiClientId, FieldKind::Int)),
            "created" => Some((Column::Created, FieldKind::Int)),
            "expires" => Some((Column::Expires, FieldKind::Int)),
            _ => None,
        }
    }

    fn id_column() -> Self::Column {
        my_model::api_token::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn ownership(user: &my_model::user::Model) -> Option<SimpleExpr> {
        Some(my_model::api_token::Column::UserId.eq(user.id))
    }
}

impl ApiResource for my_model::user_setting::Entity {
    const NEEDED_SCOPES: NeededScopes = NeededScopes {
        create: Some("user_settings.create"),
        retrieve: Some("user_settings.retrieve"),
        update: Some("user_settings.update"),
        delete: Some("user_settings.delete"),
    };
    const FILTER_FIELDS: &'static [&'static str] = &["id", "setting", "value"];
    const SORT_FIELDS: &'static [&'static str] = &["id", "setting", "value"];

    type Output = UserSettingResource;

    fn column_for(field: &str) -> Option<(Self::Column, FieldKind)> {
        use my_model::user_setting::Column;
        match field {
            "id" => Some((Column::Id, FieldKind::Int)),
            "setting" => Some((Column::Setting, FieldKind::Str)),
            "value" => Some((Column::Value, FieldKind::Str)),
            _ => None,
        }
    }

    fn id_column() -> Self::Column {
        my_model::user_setting::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn ownership(user: &my_model::user::Model) -> Option<SimpleExpr> {
        Some(my_model::user_setting::Column::UserId.eq(user.id))
    }
}

impl WritableResource for my_model::user_setting::Entity {
    type Input = UserSettingResourceIn;

    fn validate(input: &Self::Input) -> Result<(), AppError> {
        input.validate()
    }

    fn create_model(input: Self::Input, user: &my_model::user::Model) -> Self::ActiveModel {
        let now = Utc::now();
        my_model::user_setting::ActiveModel {
            setting: Set(input.setting),
            value: Set(input.value),
            user_id: Set(user.id),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
    }

    fn update_model(existing: Self::Model, input: Self::Input) -> Self::ActiveModel {
        let mut model: my_model::user_setting::ActiveModel = existing.into();
        model.setting = Set(input.setting);
        model.value = Set(input.value);
        model.updated = Set(Utc::now());
        model
    }
}
