use crate::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl RelayConfig {
    /// Load configuration from the environment.
    ///
    /// `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` are required; loading fails
    /// before any listener is bound when either is missing or empty.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(RelayConfig {
            port: get_env("PORT", Some("5000"))?.parse().unwrap_or(5000),
            telegram: TelegramConfig {
                bot_token: get_env("TELEGRAM_BOT_TOKEN", None)?,
                chat_id: get_env("TELEGRAM_CHAT_ID", None)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => {
            if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_to_default_when_unset() {
        let value = get_env("RELAY_TEST_UNSET_WITH_DEFAULT", Some("5000")).unwrap();
        assert_eq!(value, "5000");
    }

    #[test]
    fn get_env_fails_for_missing_required_key() {
        let result = get_env("RELAY_TEST_UNSET_REQUIRED", None);
        assert!(result.is_err());
    }

    #[test]
    fn get_env_treats_empty_value_as_missing() {
        env::set_var("RELAY_TEST_EMPTY_VALUE", "");
        let result = get_env("RELAY_TEST_EMPTY_VALUE", None);
        assert!(result.is_err());
        env::remove_var("RELAY_TEST_EMPTY_VALUE");
    }
}
