use std::env;
use std::process::exit;

use anyhow::Result;
use debordo_register::commands::debordo;
use debordo_register::config::ConfigError;
use debordo_register::run;
use reqwest::Client;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup tracing
    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eprintln!("Unable to set global default subscriber: {e}"))
        .ok();

    // Variables already set in the environment take precedence over the .env file
    dotenv::dotenv().ok();

    let client = Client::new();
    match run(&client, |key| env::var(key).ok()).await {
        Ok(outcome) => {
            println!("{}", outcome.report(debordo::NAME));
            info!("Done, registered: {}", outcome.is_success());
            Ok(())
        }
        Err(e) => {
            if let Some(config_error) = e.downcast_ref::<ConfigError>() {
                error!("Configuration error: {config_error}");
                println!("{}", config_error.report());
                exit(1);
            }
            Err(e)
        }
    }
}
