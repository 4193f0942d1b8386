//! Agent wallet management.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::sol_types::SolCall;
use serde_json::json;

use crate::agent::types::{wallet_binding, AgentId};
use crate::chain::contract::{agentWalletCall, unsetAgentWalletCall};
use crate::error::{rpc_error, Result};
use crate::registry::Registry;

impl Registry {
    /// The wallet bound to an agent, if one is set.
    pub async fn get_agent_wallet(&self, agent_id: AgentId) -> Result<Option<Address>> {
        let data = agentWalletCall { agentId: agent_id.0 }.abi_encode();
        let raw = self.call_registry(data).await?;

        let address = agentWalletCall::abi_decode_returns(&raw).map_err(|e| {
            rpc_error(
                format!("cannot decode agentWallet response: {}", e),
                json!({ "agent_id": agent_id.to_string() }),
            )
        })?;

        Ok(wallet_binding(address))
    }

    /// Clear an agent's wallet binding.
    ///
    /// The registry only accepts this from the registration owner. Requires
    /// a wallet.
    pub async fn unset_agent_wallet(&self, agent_id: AgentId) -> Result<TxHash> {
        let sender = self.tx_sender()?;

        let data = unsetAgentWalletCall { agentId: agent_id.0 }.abi_encode();
        let receipt = sender
            .send_confirmed(self.registry_address, U256::ZERO, Bytes::from(data))
            .await?;

        tracing::info!(
            agent_id = %agent_id,
            tx_hash = %receipt.transaction_hash,
            "Agent wallet unset"
        );
        Ok(receipt.transaction_hash)
    }
}
