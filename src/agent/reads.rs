//! On-chain reads against the registry.

use alloy::primitives::U256;
use alloy::sol_types::SolCall;
use serde_json::json;

use crate::agent::types::{wallet_binding, Agent, AgentId};
use crate::chain::contract::{getAgentCall, registrationEnabledCall, registrationFeeCall};
use crate::error::{rpc_error, Result};
use crate::registry::Registry;

impl Registry {
    /// Fetch an agent record from the registry.
    pub async fn get_agent(&self, agent_id: AgentId) -> Result<Agent> {
        let data = getAgentCall { agentId: agent_id.0 }.abi_encode();
        let raw = self.call_registry(data).await?;

        let ret = getAgentCall::abi_decode_returns(&raw).map_err(|e| {
            rpc_error(
                format!("cannot decode getAgent response: {}", e),
                json!({ "agent_id": agent_id.to_string() }),
            )
        })?;

        Ok(Agent {
            agent_id,
            owner: ret.owner,
            wallet: wallet_binding(ret.wallet),
            agent_uri: ret.agentURI,
        })
    }

    /// Current registration fee in wei.
    pub async fn get_registration_fee(&self) -> Result<U256> {
        let raw = self.call_registry(registrationFeeCall {}.abi_encode()).await?;

        registrationFeeCall::abi_decode_returns(&raw).map_err(|e| {
            rpc_error(
                format!("cannot decode registrationFee response: {}", e),
                json!({ "method": "registrationFee" }),
            )
        })
    }

    /// Whether the registry currently accepts new registrations.
    pub async fn is_registration_enabled(&self) -> Result<bool> {
        let raw = self
            .call_registry(registrationEnabledCall {}.abi_encode())
            .await?;

        registrationEnabledCall::abi_decode_returns(&raw).map_err(|e| {
            rpc_error(
                format!("cannot decode registrationEnabled response: {}", e),
                json!({ "method": "registrationEnabled" }),
            )
        })
    }
}
