//! Agent URI creation and update via the hosting API.

use serde::Deserialize;
use url::Url;

use crate::agent::types::AgentCard;
use crate::error::{validation_error, Result};
use crate::registry::Registry;

#[derive(Debug, Deserialize)]
struct CardResponse {
    uri: String,
}

impl Registry {
    /// Host a new agent card and return its URI.
    ///
    /// The returned URI is what [`Registry::register_agent`] anchors
    /// on-chain.
    pub async fn create_agent_uri(&self, card: &AgentCard) -> Result<String> {
        validate_card(card)?;

        let resp: CardResponse = self.api.post_json("/agents", card).await?;
        tracing::info!(uri = %resp.uri, "Agent card created");
        Ok(resp.uri)
    }

    /// Replace the card hosted at an existing agent URI.
    pub async fn update_agent_uri(&self, agent_uri: &str, card: &AgentCard) -> Result<String> {
        if Url::parse(agent_uri).is_err() {
            return Err(validation_error(
                format!("agent URI is not a valid URL: {}", agent_uri),
                ["agent_uri"],
            ));
        }
        validate_card(card)?;

        let resp: CardResponse = self.api.put_json(agent_uri, card).await?;
        tracing::info!(uri = %resp.uri, "Agent card updated");
        Ok(resp.uri)
    }
}

/// Check required card fields, collecting all offenders.
fn validate_card(card: &AgentCard) -> Result<()> {
    let mut fields = Vec::new();

    if card.name.trim().is_empty() {
        fields.push("name");
    }
    if card.description.trim().is_empty() {
        fields.push("description");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(validation_error(
            format!("agent card is missing required fields: {}", fields.join(", ")),
            fields,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn card_validation_names_every_missing_field() {
        let err = validate_card(&AgentCard::new(" ", "")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Validation);
        assert_eq!(
            err.fields(),
            Some(&["name".to_string(), "description".to_string()][..])
        );
    }

    #[test]
    fn complete_cards_pass() {
        assert!(validate_card(&AgentCard::new("trader", "autonomous market maker")).is_ok());
    }
}
