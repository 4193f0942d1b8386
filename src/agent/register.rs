//! Agent registration.

use alloy::primitives::Bytes;
use alloy::rpc::types::TransactionReceipt;
use alloy::sol_types::SolCall;
use serde_json::json;
use url::Url;

use crate::agent::types::{AgentId, Registration};
use crate::chain::contract::{registerCall, AgentRegistered};
use crate::error::{rpc_error, validation_error, Result};
use crate::registry::Registry;

impl Registry {
    /// Register an agent URI on-chain and return the assigned agent ID.
    ///
    /// Reads the current registration fee and attaches it as the
    /// transaction value. Requires a wallet.
    pub async fn register_agent(&self, agent_uri: &str) -> Result<Registration> {
        validate_agent_uri(agent_uri)?;
        let sender = self.tx_sender()?;

        if !self.is_registration_enabled().await? {
            return Err(rpc_error(
                "agent registration is disabled on the registry",
                json!({
                    "registry": self.registry_address.to_string(),
                    "chain_id": self.config.chain_id,
                }),
            ));
        }

        let fee = self.get_registration_fee().await?;

        let data = registerCall {
            agentURI: agent_uri.to_string(),
        }
        .abi_encode();
        let receipt = sender
            .send_confirmed(self.registry_address, fee, Bytes::from(data))
            .await?;

        let tx_hash = receipt.transaction_hash;
        let block_number = receipt.block_number.unwrap_or_default();
        let agent_id = registered_agent_id(&receipt).ok_or_else(|| {
            rpc_error(
                "registration confirmed but no AgentRegistered event found",
                json!({ "tx_hash": tx_hash.to_string() }),
            )
        })?;

        tracing::info!(agent_id = %agent_id, tx_hash = %tx_hash, "Agent registered");

        Ok(Registration {
            agent_id,
            tx_hash,
            block_number,
        })
    }
}

/// Pull the assigned agent ID out of the receipt's AgentRegistered event.
fn registered_agent_id(receipt: &TransactionReceipt) -> Option<AgentId> {
    for log in receipt.inner.logs() {
        if let Ok(decoded) = log.log_decode::<AgentRegistered>() {
            return Some(AgentId(decoded.inner.agentId));
        }
    }
    None
}

fn validate_agent_uri(agent_uri: &str) -> Result<()> {
    if agent_uri.trim().is_empty() {
        return Err(validation_error("agent_uri is required", ["agent_uri"]));
    }
    if Url::parse(agent_uri).is_err() {
        return Err(validation_error(
            format!("agent URI is not a valid URL: {}", agent_uri),
            ["agent_uri"],
        ));
    }
    Ok(())
}
