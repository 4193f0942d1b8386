//! Metadata writes.

use alloy::primitives::{Bytes, TxHash, U256};
use alloy::sol_types::SolCall;

use crate::agent::types::AgentId;
use crate::chain::contract::setMetadataCall;
use crate::error::{validation_error, Result};
use crate::registry::Registry;

impl Registry {
    /// Write a metadata entry for an agent. The value is opaque bytes.
    ///
    /// Requires a wallet.
    pub async fn set_metadata(
        &self,
        agent_id: AgentId,
        key: &str,
        value: impl Into<Bytes>,
    ) -> Result<TxHash> {
        if key.trim().is_empty() {
            return Err(validation_error("metadata key is required", ["key"]));
        }
        let sender = self.tx_sender()?;

        let data = setMetadataCall {
            agentId: agent_id.0,
            key: key.to_string(),
            value: value.into(),
        }
        .abi_encode();
        let receipt = sender
            .send_confirmed(self.registry_address, U256::ZERO, Bytes::from(data))
            .await?;

        tracing::info!(
            agent_id = %agent_id,
            key = %key,
            tx_hash = %receipt.transaction_hash,
            "Metadata set"
        );
        Ok(receipt.transaction_hash)
    }
}
