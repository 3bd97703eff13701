use url::Url;

use super::AppError;

/// Environment variable holding the completion endpoint API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable overriding the completion endpoint base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";
/// Environment variable overriding the model identifier.
pub const MODEL_VAR: &str = "MODEL_NAME";

/// Completion endpoint settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key sent as bearer auth.
    pub api_key: String,
    /// Base URL of the chat-completion service.
    pub base_url: Url,
    /// Model identifier sent with every request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// `API_BASE_URL` and `MODEL_NAME` fall back to documented defaults;
    /// `OPENAI_API_KEY` has no default and must be set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            AppError::Configuration(format!("{API_KEY_VAR} environment variable not set"))
        })?;

        let base_url = match std::env::var(BASE_URL_VAR) {
            Ok(value) => Url::parse(&value).map_err(|e| {
                AppError::Configuration(format!("Invalid {BASE_URL_VAR} '{value}': {e}"))
            })?,
            Err(_) => default_base_url(),
        };

        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| default_model());

        Ok(Self { api_key, base_url, model, timeout_secs: default_timeout() })
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.aimlapi.com").expect("default base URL is valid")
}

fn default_model() -> String {
    "meta-llama/Llama-3.2-3B-Instruct-Turbo".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_env() {
        unsafe {
            std::env::remove_var(API_KEY_VAR);
            std::env::remove_var(BASE_URL_VAR);
            std::env::remove_var(MODEL_VAR);
        }
    }

    #[test]
    #[serial]
    fn missing_api_key_is_an_error() {
        clear_env();
        let result = ApiConfig::from_env();
        assert!(matches!(result, Err(AppError::Configuration(ref msg)) if msg.contains(API_KEY_VAR)));
    }

    #[test]
    #[serial]
    fn defaults_apply_when_only_key_is_set() {
        clear_env();
        unsafe {
            std::env::set_var(API_KEY_VAR, "test-key");
        }
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.aimlapi.com/");
        assert_eq!(config.model, "meta-llama/Llama-3.2-3B-Instruct-Turbo");
        assert_eq!(config.timeout_secs, 30);
        clear_env();
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_env();
        unsafe {
            std::env::set_var(API_KEY_VAR, "test-key");
            std::env::set_var(BASE_URL_VAR, "https://example.test/v1/");
            std::env::set_var(MODEL_VAR, "test-model");
        }
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.test/v1/");
        assert_eq!(config.model, "test-model");
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_base_url_is_an_error() {
        clear_env();
        unsafe {
            std::env::set_var(API_KEY_VAR, "test-key");
            std::env::set_var(BASE_URL_VAR, "not a url");
        }
        let result = ApiConfig::from_env();
        assert!(matches!(result, Err(AppError::Configuration(ref msg)) if msg.contains(BASE_URL_VAR)));
        clear_env();
    }
}
