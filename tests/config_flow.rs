use my_rest_api::config::EnvConfig;
use my_rest_api::db::service::DbService;

// Single test in this binary; it owns the environment variable.
#[tokio::test]
async fn database_is_configured_through_the_environment() {
    let data_dir = tempfile::tempdir().unwrap();
    let database_str = format!(
        "sqlite://{}?mode=rwc",
        data_dir.path().join("configured.sqlite").display()
    );
    std::env::set_var("MY_REST_API_DATABASE_STR", &database_str);

    let config = EnvConfig::from_env();
    assert_eq!(config.database_str, database_str);

    // The configured database is reachable and migrated.
    let db = DbService::new(&config.database_str).await.unwrap();
    let user = db.get_user_by_username("nobody").await.unwrap();
    assert!(user.is_none());

    std::env::remove_var("MY_REST_API_DATABASE_STR");
}
