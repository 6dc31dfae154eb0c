use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use commands::debordo;
use config::{Config, DEFAULT_API_BASE};
use register::{register_command, Outcome};

pub mod commands;
pub mod config;
pub mod register;

/// Register the `/debordo` command using the configuration found through `lookup`
/// Nothing is sent when the configuration is incomplete
pub async fn run<F>(client: &Client, lookup: F) -> Result<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    run_against(client, lookup, DEFAULT_API_BASE).await
}

/// Same as [`run`], sending the request to `api_base` instead of the Discord API
pub async fn run_against<F>(client: &Client, lookup: F, api_base: &str) -> Result<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup)?.with_api_base(api_base);
    debug!("Loaded {config:?}");

    let command = debordo::command();
    command
        .validate()
        .with_context(|| format!("Invalid /{} command", command.name))?;
    for option in &command.options {
        debug!(
            "Option {} ({}, required: {})",
            option.name, option.kind, option.required
        );
    }

    register_command(client, &config, &command)
        .await
        .with_context(|| format!("Failed to register /{}", command.name))
}
