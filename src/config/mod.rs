#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TABLE: &str = "golf-scores";

pub const TOKEN_VAR: &str = "AIRTABLE_TOKEN";
pub const BASE_ID_VAR: &str = "AIRTABLE_BASE_ID";
pub const API_URL_VAR: &str = "AIRTABLE_API_URL";
pub const TABLE_VAR: &str = "AIRTABLE_TABLE";

/// 連線設定，建立後不可變更
#[derive(Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub base_id: String,
    pub token: String,
    pub table: String,
}

impl ClientConfig {
    pub fn new(base_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            base_id: base_id.into(),
            token: token.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 缺少憑證不視為錯誤：請求會在 API 端以授權錯誤失敗
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR).unwrap_or_else(|| {
            tracing::warn!("⚠️ {} is not set, requests will be rejected by Airtable", TOKEN_VAR);
            String::new()
        });
        let base_id = lookup(BASE_ID_VAR).unwrap_or_else(|| {
            tracing::warn!("⚠️ {} is not set, requests will be rejected by Airtable", BASE_ID_VAR);
            String::new()
        });

        Self {
            api_url: lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            base_id,
            token,
            table: lookup(TABLE_VAR).unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        }
    }

    /// `{api_url}/{base_id}/{table}`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.base_id,
            self.table
        )
    }
}

// token 不可出現在日誌中
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("base_id", &self.base_id)
            .field("token", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url(API_URL_VAR, &self.api_url)?;
        validate_non_empty_string(BASE_ID_VAR, &self.base_id)?;
        validate_non_empty_string(TOKEN_VAR, &self.token)?;
        validate_non_empty_string(TABLE_VAR, &self.table)?;

        tracing::debug!("✅ Client configuration validation passed");
        Ok(())
    }
}

/// 載入 `.env`（或指定檔案）到環境變數。檔案不存在時略過。
pub fn load_env_file(path: Option<&str>) {
    let loaded = match path {
        Some(path) => dotenv::from_filename(path),
        None => dotenv::dotenv(),
    };

    match loaded {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::debug!("No environment file loaded: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_endpoint_from_lookup() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AIRTABLE_TOKEN", "tok"),
            ("AIRTABLE_BASE_ID", "base1"),
        ]));

        assert_eq!(config.token, "tok");
        assert_eq!(
            config.endpoint(),
            "https://api.airtable.com/v0/base1/golf-scores"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("AIRTABLE_TOKEN", "tok"),
            ("AIRTABLE_BASE_ID", "base1"),
            ("AIRTABLE_API_URL", "http://127.0.0.1:9000/v0/"),
            ("AIRTABLE_TABLE", "practice-scores"),
        ]));

        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:9000/v0/base1/practice-scores"
        );
    }

    #[test]
    fn test_missing_credentials_are_not_fatal() {
        let config = ClientConfig::from_lookup(lookup_from(&[]));

        assert!(config.token.is_empty());
        assert_eq!(config.endpoint(), "https://api.airtable.com/v0//golf-scores");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("base1", "tok")
            .with_api_url("http://localhost:8080/v0")
            .with_table("range-sessions");

        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v0/base1/range-sessions"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("base1", "super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("base1"));
    }
}
