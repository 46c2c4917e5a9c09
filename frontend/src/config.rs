use yew::prelude::*;

use crate::services::logging::{LogLevel, LogLevelParseError, Logger};

/// Build-time variable switching the UI to the new client flow
pub const NEW_CLIENT_VAR: &str = "APP_NEW_CLIENT";
/// Build-time variable holding the console log threshold
pub const LOG_LEVEL_VAR: &str = "APP_LOG_LEVEL";

/// Process-wide configuration, fixed when the bundle is built.
///
/// Values are captured with `option_env!` so a WASM build behaves like a
/// bundler injecting its environment: changing them requires a rebuild.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Raw value of `APP_NEW_CLIENT`, if it was set
    pub new_client: Option<String>,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid APP_LOG_LEVEL: {0}")]
    InvalidLogLevel(#[from] LogLevelParseError),
}

impl AppConfig {
    /// Build-time config, falling back to the default log level when
    /// `APP_LOG_LEVEL` does not parse
    pub fn load() -> Self {
        Self::from_values_or_default(option_env!("APP_NEW_CLIENT"), option_env!("APP_LOG_LEVEL"))
    }

    /// Like `from_values`, but an unparsable log level is logged as a
    /// warning and replaced by the default
    pub fn from_values_or_default(new_client: Option<&str>, log_level: Option<&str>) -> Self {
        Self::from_values(new_client, log_level).unwrap_or_else(|err| {
            Logger::warn_with_component("config", &format!("{}; using default log level", err));
            Self {
                new_client: new_client.map(str::to_string),
                log_level: LogLevel::default(),
            }
        })
    }

    /// Build a config from raw variable values; `None` means unset
    pub fn from_values(new_client: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let log_level = match log_level {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => LogLevel::default(),
        };

        Ok(Self {
            new_client: new_client.map(str::to_string),
            log_level,
        })
    }

    pub fn is_new_client(&self) -> bool {
        is_new_client(self)
    }
}

/// True exactly when `APP_NEW_CLIENT` was the literal string `"true"`
pub fn is_new_client(config: &AppConfig) -> bool {
    config.new_client.as_deref() == Some("true")
}

/// Config provided by the root `ContextProvider`, or the defaults outside one
#[hook]
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
