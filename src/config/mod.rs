use std::fmt::{self, Debug};

use thiserror::Error;

pub const TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
pub const APPLICATION_ID_VAR: &str = "DISCORD_APPLICATION_ID";

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Returned when a required value is not available in the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set or is empty")]
    Missing(&'static str),
}

impl ConfigError {
    /// Message displayed to the person running the tool
    pub fn report(&self) -> String {
        format!("❌ Veuillez définir {TOKEN_VAR} et {APPLICATION_ID_VAR}")
    }
}

/// Values needed to talk to the Discord API on behalf of the application
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub application_id: String,
    pub api_base: String,
}

impl Config {
    /// Read the config through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let token = required(TOKEN_VAR)?;
        let application_id = required(APPLICATION_ID_VAR)?;
        Ok(Config {
            token,
            application_id,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Send requests to another server than Discord, such as a local mock
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Endpoint creating global commands for this application
    pub fn commands_url(&self) -> String {
        format!(
            "{}/applications/{}/commands",
            self.api_base, self.application_id
        )
    }

    pub fn authorization(&self) -> String {
        format!("Bot {}", self.token)
    }
}

// The token must never end up in logs
impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("application_id", &self.application_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}
