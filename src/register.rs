use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::commands::CommandDescriptor;
use crate::config::Config;

/// Returned when Discord could not be reached or answered with an unreadable body
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// What Discord answered to the registration request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The command was created or updated, holds the decoded response body
    Registered(Value),
    /// Any status other than 200 or 201, with the raw body text
    Rejected { status: u16, body: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Registered(_))
    }

    /// Message displayed to the person running the tool
    pub fn report(&self, command_name: &str) -> String {
        match self {
            Outcome::Registered(body) => {
                format!("✅ Commande /{command_name} enregistrée avec succès!\n   Réponse: {body}")
            }
            Outcome::Rejected { status, body } => {
                format!("❌ Erreur lors de l'enregistrement: {status}\n   Réponse: {body}")
            }
        }
    }
}

/// Send the command to Discord, in a single POST request
/// Rejections are not retried
pub async fn register_command(
    client: &Client,
    config: &Config,
    command: &CommandDescriptor,
) -> Result<Outcome, RegisterError> {
    let url = config.commands_url();
    info!("Registering /{} at {url}", command.name);

    let response = client
        .post(&url)
        .header(AUTHORIZATION, config.authorization())
        .header(CONTENT_TYPE, "application/json")
        .json(command)
        .send()
        .await?;

    let status = response.status();
    debug!("Discord answered with status {status}");
    match status {
        StatusCode::OK | StatusCode::CREATED => {
            let body: Value = response.json().await?;
            info!("Command /{} registered", command.name);
            Ok(Outcome::Registered(body))
        }
        _ => {
            let body = response.text().await?;
            warn!("Discord rejected /{} with status {status}", command.name);
            Ok(Outcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Outcome;

    #[test]
    fn success_report_includes_body() {
        let outcome = Outcome::Registered(json!({"id": "999"}));
        let report = outcome.report("debordo");
        assert!(outcome.is_success());
        assert!(report.starts_with("✅ Commande /debordo enregistrée"));
        assert!(report.contains("\"999\""));
    }

    #[test]
    fn failure_report_includes_status_and_body() {
        let outcome = Outcome::Rejected {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        let report = outcome.report("debordo");
        assert!(!outcome.is_success());
        assert!(report.starts_with("❌"));
        assert!(report.contains("401"));
        assert!(report.contains("Unauthorized"));
    }
}
