//! Application configuration loaded from environment variables.

use std::time::Duration;

use crate::errors::ApiError;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default number of chat messages kept in the sidebar history.
pub const DEFAULT_CHAT_HISTORY_LIMIT: usize = 50;

/// Default per-request timeout for the completion call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the completion service.
    pub api_key: String,

    /// Optional API base, e.g. an OpenAI-compatible Gemini endpoint.
    /// `None` keeps the async-openai default.
    pub api_base: Option<String>,

    /// Chat model used for post generation.
    pub model: String,

    /// Capacity of the chat history ring buffer.
    pub chat_history_limit: usize,

    /// Timeout applied to each outbound completion request.
    pub request_timeout: Duration,
}

impl Config {
    /// Build a configuration with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: None,
            model: DEFAULT_MODEL.to_string(),
            chat_history_limit: DEFAULT_CHAT_HISTORY_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key for the completion service
    ///
    /// Optional:
    /// - `OPENAI_API_BASE`: API base URL (default: async-openai's)
    /// - `CANVAS_MODEL`: Chat model (default: "gpt-4o")
    /// - `CANVAS_CHAT_HISTORY_LIMIT`: Chat history capacity (default: 50)
    /// - `CANVAS_REQUEST_TIMEOUT_SECS`: Completion timeout in seconds (default: 60)
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ApiError::MissingSecret("OPENAI_API_KEY"))?;

        let api_base = std::env::var("OPENAI_API_BASE")
            .ok()
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty());

        let model = std::env::var("CANVAS_MODEL")
            .ok()
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let chat_history_limit =
            parse_var("CANVAS_CHAT_HISTORY_LIMIT")?.unwrap_or(DEFAULT_CHAT_HISTORY_LIMIT);

        let request_timeout = parse_var::<u64>("CANVAS_REQUEST_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        tracing::info!(
            api_base = api_base.as_deref().unwrap_or("default"),
            model = %model,
            chat_history_limit,
            request_timeout_secs = request_timeout.as_secs(),
            "canvas configuration loaded"
        );

        Ok(Self {
            api_key,
            api_base,
            model,
            chat_history_limit,
            request_timeout,
        })
    }
}

/// Parse an optional numeric variable. Unset or blank yields `None`.
fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ApiError> {
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidSetting { key, value: raw }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "OPENAI_API_KEY",
        "OPENAI_API_BASE",
        "CANVAS_MODEL",
        "CANVAS_CHAT_HISTORY_LIMIT",
        "CANVAS_REQUEST_TIMEOUT_SECS",
    ];

    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        for k in ENV_KEYS {
            std::env::remove_var(k);
        }
        for (k, v) in vars {
            std::env::set_var(k, v);
        }

        f();

        for (k, v) in &saved {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[("OPENAI_API_KEY", "sk-test")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.api_key, "sk-test");
            assert!(config.api_base.is_none());
            assert_eq!(config.model, "gpt-4o");
            assert_eq!(config.chat_history_limit, 50);
            assert_eq!(config.request_timeout, Duration::from_secs(60));
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("OPENAI_API_KEY", "sk-test"),
                (
                    "OPENAI_API_BASE",
                    "https://generativelanguage.googleapis.com/v1beta/openai/",
                ),
                ("CANVAS_MODEL", "gemini-2.0-flash"),
                ("CANVAS_CHAT_HISTORY_LIMIT", "10"),
                ("CANVAS_REQUEST_TIMEOUT_SECS", "5"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.api_base.as_deref(),
                    Some("https://generativelanguage.googleapis.com/v1beta/openai")
                );
                assert_eq!(config.model, "gemini-2.0-flash");
                assert_eq!(config.chat_history_limit, 10);
                assert_eq!(config.request_timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn config_missing_key() {
        with_env_vars(&[], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ApiError::MissingSecret("OPENAI_API_KEY")));
        });
    }

    #[test]
    fn config_blank_key_is_missing() {
        with_env_vars(&[("OPENAI_API_KEY", "   ")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_invalid_number() {
        with_env_vars(
            &[
                ("OPENAI_API_KEY", "sk-test"),
                ("CANVAS_CHAT_HISTORY_LIMIT", "lots"),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                match err {
                    ApiError::InvalidSetting { key, value } => {
                        assert_eq!(key, "CANVAS_CHAT_HISTORY_LIMIT");
                        assert_eq!(value, "lots");
                    }
                    other => panic!("unexpected error: {other}"),
                }
            },
        );
    }

    #[test]
    fn config_blank_optional_values_use_defaults() {
        with_env_vars(
            &[
                ("OPENAI_API_KEY", "sk-test"),
                ("OPENAI_API_BASE", ""),
                ("CANVAS_MODEL", " "),
                ("CANVAS_REQUEST_TIMEOUT_SECS", ""),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.api_base.is_none());
                assert_eq!(config.model, DEFAULT_MODEL);
                assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
            },
        );
    }
}
