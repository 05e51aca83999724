//! Environment-driven configuration

use crate::api::DEFAULT_BASE_URL;

const DEFAULT_TOKEN_DB: &str = "sqlite:data/credentials.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin every API path is appended to
    pub base_url: String,
    /// sqlx URL of the credentials database
    pub token_db_url: String,
    /// Credentials for an automatic login at startup
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Config {
    /// Reads `STOREFRONT_API_BASE_URL`, `STOREFRONT_TOKEN_DB`,
    /// `STOREFRONT_USERNAME` and `STOREFRONT_PASSWORD`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            base_url: non_empty("STOREFRONT_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token_db_url: non_empty("STOREFRONT_TOKEN_DB")
                .unwrap_or_else(|| DEFAULT_TOKEN_DB.to_string()),
            username: non_empty("STOREFRONT_USERNAME"),
            password: non_empty("STOREFRONT_PASSWORD"),
        }
    }
}
