//! Client Configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// REST backend root, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// localStorage key of the single create-form draft
    #[serde(default = "default_draft_key")]
    pub draft_key: String,
    /// How long a transient notification stays up
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: default_api_base_url(),
            draft_key: default_draft_key(),
            notification_ttl_ms: default_notification_ttl_ms(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON config; absent fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: ClientConfig = serde_json::from_str(json)?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_draft_key() -> String {
    "task-form-draft".to_string()
}

fn default_notification_ttl_ms() -> u32 {
    4500
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = ClientConfig::from_json("{}").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.draft_key, "task-form-draft");
    }

    #[test]
    fn test_partial_override_and_trailing_slash() {
        let config = ClientConfig::from_json(r#"{"api_base_url": "https://tasks.example.com/api/v1/", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://tasks.example.com/api/v1");
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        assert_eq!(config.notification_ttl_ms, 4500);
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = ClientConfig { log_level: "loud".into(), ..Default::default() };
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
