//! Agent domain types.

use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

/// On-chain agent identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentId(pub U256);

impl From<u64> for AgentId {
    fn from(id: u64) -> Self {
        Self(U256::from(id))
    }
}

impl From<U256> for AgentId {
    fn from(id: U256) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An agent record as stored in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub agent_id: AgentId,
    /// Account that owns the registration.
    pub owner: Address,
    /// Wallet bound to the agent, if any.
    pub wallet: Option<Address>,
    /// URI of the agent's hosted card.
    pub agent_uri: String,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub agent_id: AgentId,
    pub tx_hash: TxHash,
    pub block_number: u64,
}

/// The hosted document an agent URI points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Account that will own the registration, if already known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Address>,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

impl AgentCard {
    /// A card with the required fields set and everything else empty.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: None,
            owner: None,
            capabilities: Vec::new(),
        }
    }
}

/// Map the contract's zero-address sentinel to an optional wallet binding.
pub(crate) fn wallet_binding(address: Address) -> Option<Address> {
    if address == Address::ZERO {
        None
    } else {
        Some(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_id_conversions() {
        let id = AgentId::from(42u64);
        assert_eq!(id.0, U256::from(42));
        assert_eq!(id.to_string(), "42");
        assert_eq!(AgentId::from(U256::from(42)), id);
    }

    #[test]
    fn zero_address_means_no_wallet() {
        assert_eq!(wallet_binding(Address::ZERO), None);

        let addr: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
            .parse()
            .unwrap();
        assert_eq!(wallet_binding(addr), Some(addr));
    }

    #[test]
    fn card_serialization_skips_unset_fields() {
        let card = AgentCard::new("trader", "autonomous market maker");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["name"], "trader");
        assert!(json.get("version").is_none());
        assert!(json.get("owner").is_none());

        let decoded: AgentCard = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, card);
    }
}
