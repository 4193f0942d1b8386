//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for a registry client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Chain ID the registry is deployed on.
    pub chain_id: u64,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs.
    pub failover_rpc_urls: Vec<String>,

    /// Address of the identity registry contract.
    pub registry_address: String,

    /// Base URL of the agent-card hosting API.
    pub api_base_url: String,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Blocks to wait before a transaction counts as confirmed.
    pub confirmation_blocks: u32,

    /// Seconds to wait for a confirmation before giving up.
    pub confirmation_timeout_secs: u64,

    /// Refuse to send transactions above this gas price.
    pub max_gas_price_gwei: u64,

    /// Safety multiplier applied to the quoted gas price.
    pub gas_price_multiplier: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            chain_id: 0,
            rpc_url: String::new(),
            failover_rpc_urls: Vec::new(),
            registry_address: String::new(),
            api_base_url: String::new(),
            rpc_timeout_secs: 10,
            confirmation_blocks: 3,
            confirmation_timeout_secs: 120,
            max_gas_price_gwei: 500,
            gas_price_multiplier: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = RegistryConfig::default();
        assert_eq!(config.rpc_timeout_secs, 10);
        assert_eq!(config.confirmation_blocks, 3);
        assert!(config.gas_price_multiplier >= 1.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RegistryConfig = toml::from_str(
            r#"
            chain_id = 31337
            rpc_url = "http://127.0.0.1:8545"
            "#,
        )
        .unwrap();
        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.confirmation_blocks, 3);
        assert!(config.failover_rpc_urls.is_empty());
    }
}
