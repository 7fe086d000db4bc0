use std::env;
use std::sync::OnceLock;

/// Application configuration, read from `MY_REST_API_*` environment
/// variables with sensible defaults.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub database_str: String,
    pub session_timeout_in_seconds: i64,
    pub session_refresh_in_seconds: i64,
    pub default_page_size: u64,
    pub max_page_size: u64,
}

impl EnvConfig {
    fn get_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env_or("MY_REST_API_PORT", 8080),
            database_str: env::var("MY_REST_API_DATABASE_STR")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
            session_timeout_in_seconds: Self::get_env_or(
                "MY_REST_API_SESSION_TIMEOUT_IN_SECONDS",
                3600,
            ),
            session_refresh_in_seconds: Self::get_env_or(
                "MY_REST_API_SESSION_REFRESH_IN_SECONDS",
                3600,
            ),
            default_page_size: Self::get_env_or("MY_REST_API_DEFAULT_PAGE_SIZE", 25),
            max_page_size: Self::get_env_or("MY_REST_API_MAX_PAGE_SIZE", 250),
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get_or_init(EnvConfig::from_env)
}
