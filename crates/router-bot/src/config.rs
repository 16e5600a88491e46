//! Application configuration loaded from an optional file and the environment.

use anyhow::{Context, Result};
use chat_router::RouterConfig;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Signal configuration
    #[serde(default)]
    pub signal: SignalConfig,

    /// Command routing. `token` is the Signal account number the bot runs as.
    #[serde(default)]
    pub router: RouterConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Signal CLI REST API endpoint
    #[serde(default = "default_signal_service")]
    pub service_url: String,

    /// Poll interval for messages
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            service_url: default_signal_service(),
            poll_interval: default_poll_interval(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_signal_service() -> String {
    "http://signal-api:8080".into()
}

fn default_poll_interval() -> Duration {
    Duration::from_millis(200)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from `router.{yaml,json,toml}` if present, then
    /// environment variables (`ROUTER__PREFIX`, `ROUTER__CHANNELS__ADMIN`, ...).
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("router").required(false))
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Keep strings as strings: parsing would turn +16504928286
                    // into a number and drop the + prefix.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.signal.service_url, "http://signal-api:8080");
        assert_eq!(config.signal.poll_interval, Duration::from_millis(200));
        assert_eq!(config.bot.log_level, "info");
        assert_eq!(config.router.prefix, "!");
        assert!(config.router.token.is_none());
    }

    #[test]
    fn test_deserialize_yaml_file() {
        let yaml = r#"
signal:
  service_url: http://localhost:8080
  poll_interval: 1s
router:
  token: "+15555555555"
  prefix: "?"
  safemode: true
  channels:
    general: "+14155551234"
    admin: group-admin
  access_order: [admin, general]
"#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.signal.service_url, "http://localhost:8080");
        assert_eq!(config.signal.poll_interval, Duration::from_secs(1));
        assert_eq!(config.router.require_token().unwrap(), "+15555555555");
        assert_eq!(config.router.prefix, "?");
        assert!(config.router.safemode);
        assert_eq!(config.router.channels["admin"], "group-admin");
        assert_eq!(config.router.access_order().roles(), &["admin", "general"]);
        assert_eq!(config.bot.log_level, "info");
    }

    #[test]
    fn test_deserialize_string_values() {
        let config: Config = config::Config::builder()
            .set_override("router.token", "+15555555555")
            .unwrap()
            .set_override("router.safemode", "true")
            .unwrap()
            .set_override("router.max_message_len", "500")
            .unwrap()
            .set_override("router.access_order", "admin,general")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.router.token.as_deref(), Some("+15555555555"));
        assert!(config.router.safemode);
        assert_eq!(config.router.max_message_len, 500);
        assert_eq!(config.router.access_order().roles(), &["admin", "general"]);
    }
}
