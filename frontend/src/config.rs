//! Compile-time configuration.
//!
//! Values come from `MSGDESK_*` variables, either set in the build
//! environment or loaded from `.env` by `build.rs`.

use msgdesk::ApiConfig;
use msgdesk::config::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut api = ApiConfig::new(option_env!("MSGDESK_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL));
        override_path(&mut api.login_path, option_env!("MSGDESK_LOGIN_PATH"));
        override_path(&mut api.list_path, option_env!("MSGDESK_LIST_PATH"));
        override_path(&mut api.record_path, option_env!("MSGDESK_MESSAGE_PATH"));
        override_path(&mut api.create_path, option_env!("MSGDESK_CREATE_PATH"));

        Self {
            api,
            log_level: parse_level(option_env!("MSGDESK_LOG_LEVEL")),
        }
    }
}

fn override_path(slot: &mut String, value: Option<&str>) {
    if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
        *slot = v.to_string();
    }
}

fn parse_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parsing() {
        assert_eq!(parse_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_level(Some("WARN")), log::Level::Warn);
        assert_eq!(parse_level(Some("loud")), log::Level::Info);
        assert_eq!(parse_level(None), log::Level::Info);
    }

    #[test]
    fn blank_paths_keep_defaults() {
        let mut path = "/messages".to_string();
        override_path(&mut path, Some("  "));
        assert_eq!(path, "/messages");
        override_path(&mut path, Some("/list"));
        assert_eq!(path, "/list");
    }
}
