use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::debug;

/// Configuration for greeter-bot loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_bot_token: String,
    pub telegram_bot_name: String,

    // Storage
    pub user_db_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_inner(true)
    }

    #[cfg(test)]
    pub fn from_env_no_dotenv() -> Result<Self> {
        Self::from_env_inner(false)
    }

    fn from_env_inner(load_dotenv: bool) -> Result<Self> {
        if load_dotenv {
            dotenvy::dotenv().ok();
        }

        let telegram_bot_token = required_var("TELEGRAM_BOT_TOKEN")?;
        let telegram_bot_name = required_var("TELEGRAM_BOT_NAME")?;

        let user_db_path =
            std::env::var("USER_DB_PATH").unwrap_or_else(|_| "./data/users.db".to_string());
        let user_db_path = PathBuf::from(shellexpand::tilde(&user_db_path).into_owned());

        debug!(
            bot_name = %telegram_bot_name,
            user_db = %user_db_path.display(),
            "Config resolved from environment"
        );

        Ok(Config {
            telegram_bot_token,
            telegram_bot_name,
            user_db_path,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow!("{} is required but not set", name))
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config {{\n  telegram_bot_token: ***MASKED***,\n  telegram_bot_name: {},\n  user_db_path: {:?},\n}}",
            self.telegram_bot_name, self.user_db_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clean_config_env() {
        for var in ["TELEGRAM_BOT_TOKEN", "TELEGRAM_BOT_NAME", "USER_DB_PATH"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_telegram_bot_token() {
        clean_config_env();
        std::env::set_var("TELEGRAM_BOT_NAME", "greeter_bot");

        let result = Config::from_env_no_dotenv();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("TELEGRAM_BOT_TOKEN is required"));
    }

    #[test]
    #[serial]
    fn test_missing_telegram_bot_name() {
        clean_config_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");

        let result = Config::from_env_no_dotenv();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("TELEGRAM_BOT_NAME is required"));
    }

    #[test]
    #[serial]
    fn test_blank_token_is_treated_as_missing() {
        clean_config_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "   ");
        std::env::set_var("TELEGRAM_BOT_NAME", "greeter_bot");

        let result = Config::from_env_no_dotenv();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_applied_correctly() {
        clean_config_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_BOT_NAME", "greeter_bot");

        let config = Config::from_env_no_dotenv().expect("Config should load with defaults");

        assert_eq!(config.telegram_bot_token, "test-token");
        assert_eq!(config.telegram_bot_name, "greeter_bot");
        assert_eq!(config.user_db_path, PathBuf::from("./data/users.db"));
    }

    #[test]
    #[serial]
    fn test_user_db_path_expands_tilde() {
        clean_config_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_BOT_NAME", "greeter_bot");
        std::env::set_var("USER_DB_PATH", "~/greeter/users.db");

        let config = Config::from_env_no_dotenv().unwrap();
        let path = config.user_db_path.to_string_lossy().to_string();
        assert!(!path.starts_with('~'));
        assert!(path.ends_with("greeter/users.db"));
    }

    #[test]
    fn test_display_masks_token() {
        let config = Config {
            telegram_bot_token: "secret-token-value".to_string(),
            telegram_bot_name: "greeter_bot".to_string(),
            user_db_path: PathBuf::from("/tmp/users.db"),
        };

        let rendered = config.to_string();
        assert!(rendered.contains("***MASKED***"));
        assert!(rendered.contains("greeter_bot"));
        assert!(!rendered.contains("secret-token-value"));
    }
}
