use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use my_model::user::UserRole;
use my_rest_api::db::DbService;
use my_rest_api::utils::token::{hash_password, new_second_factor_secret};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;

pub mod client;

const SEED: &str = include_str!("../fixtures/seed.json");

#[derive(Deserialize)]
struct Seed {
    users: Vec<SeedUser>,
    tags: Vec<SeedTag>,
    api_clients: Vec<SeedApiClient>,
    api_tokens: Vec<SeedApiToken>,
    user_settings: Vec<SeedUserSetting>,
}

#[derive(Deserialize)]
struct SeedUser {
    fullname: String,
    username: String,
    email: String,
    role: i32,
    password: String,
    #[serde(default)]
    second_factor: bool,
}

#[derive(Deserialize)]
struct SeedTag {
    user: String,
    title: String,
    color: Option<String>,
}

#[derive(Deserialize)]
struct SeedApiClient {
    user: String,
    app_name: String,
    app_publisher: String,
    redirect_url: Option<String>,
}

#[derive(Deserialize)]
struct SeedApiToken {
    user: String,
    title: String,
    token: String,
    expires: DateTime<Utc>,
    #[serde(default)]
    scopes: Vec<String>,
}

#[derive(Deserialize)]
struct SeedUserSetting {
    user: String,
    setting: String,
    value: String,
}

/// A migrated, seeded file-based SQLite database for one test.
pub struct TestContext {
    pub db: Arc<DbService>,
    /// TOTP secret assigned to `normal.user.2` at seed time.
    pub second_factor: String,
    _data_dir: tempfile::TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let data_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.path().join("test.sqlite").display()
        );
        let db = Arc::new(
            DbService::new(&db_url)
                .await
                .expect("Failed to initialize database"),
        );
        let second_factor = load_seed(&db).await;

        TestContext {
            db,
            second_factor,
            _data_dir: data_dir,
        }
    }
}

/// Load the JSON fixture into the database. Returns the generated TOTP
/// secret of the seeded second-factor user.
async fn load_seed(db: &DbService) -> String {
    let seed: Seed = serde_json::from_str(SEED).expect("Invalid seed fixture");
    let conn = db.connection();
    let now = Utc::now();

    let mut second_factor = String::new();
    let mut user_ids: HashMap<String, i32> = HashMap::new();
    for user in seed.users {
        let secret = user.second_factor.then(|| {
            second_factor = new_second_factor_secret();
            second_factor.clone()
        });
        let model = my_model::user::ActiveModel {
            fullname: Set(user.fullname),
            username: Set(user.username.clone()),
            email: Set(user.email),
            role: Set(UserRole::try_from(user.role).expect("Invalid role in fixture")),
            password_hash: Set(hash_password(&user.password).expect("Failed to hash password")),
            second_factor: Set(secret),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .expect("Failed to seed user");
        user_ids.insert(user.username, model.id);
    }

    for tag in seed.tags {
        my_model::tag::ActiveModel {
            title: Set(tag.title),
            color: Set(tag.color),
            user_id: Set(user_ids[&tag.user]),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .expect("Failed to seed tag");
    }

    for api_client in seed.api_clients {
        my_model::api_client::ActiveModel {
            app_name: Set(api_client.app_name),
            app_publisher: Set(api_client.app_publisher),
            redirect_url: Set(api_client.redirect_url),
            enabled: Set(true),
            expires: Set("2099-01-01T00:00:00Z".parse().expect("Invalid timestamp")),
            user_id: Set(user_ids[&api_client.user]),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .expect("Failed to seed API client");
    }

    for api_token in seed.api_tokens {
        let token = my_model::api_token::ActiveModel {
            title: Set(api_token.title),
            token: Set(api_token.token),
            enabled: Set(true),
            expires: Set(api_token.expires),
            api_client_id: Set(None),
            user_id: Set(user_ids[&api_token.user]),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .expect("Failed to seed API token");

        for scope in api_token.scopes {
            let (module, subject) = scope.split_once('.').expect("Invalid scope in fixture");
            let scope_row = my_model::api_scope::Entity::find()
                .filter(my_model::api_scope::Column::Module.eq(module))
                .filter(my_model::api_scope::Column::Subject.eq(subject))
                .one(conn)
                .await
                .expect("Failed to look up scope")
                .expect("Scope missing from migration seed");
            my_model::api_token_scope::ActiveModel {
                api_token_id: Set(token.id),
                api_scope_id: Set(scope_row.id),
                ..Default::default()
            }
            .insert(conn)
            .await
            .expect("Failed to seed token scope");
        }
    }

    for setting in seed.user_settings {
        my_model::user_setting::ActiveModel {
            setting: Set(setting.setting),
            value: Set(setting.value),
            user_id: Set(user_ids[&setting.user]),
            created: Set(now),
            updated: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .expect("Failed to seed user setting");
    }

    second_factor
}
