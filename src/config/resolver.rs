//! Configuration resolution.
//!
//! Precedence, lowest to highest: chain preset, environment variables,
//! explicit caller overrides. The resolved configuration is validated before
//! it is returned.

use crate::config::schema::RegistryConfig;
use crate::config::validation::validate_config;
use crate::error::Result;

/// Environment variable overriding the RPC endpoint.
pub const RPC_URL_ENV_VAR: &str = "AGENT_REGISTRY_RPC_URL";

/// Environment variable overriding the registry contract address.
pub const REGISTRY_ADDRESS_ENV_VAR: &str = "AGENT_REGISTRY_ADDRESS";

/// Environment variable overriding the agent-card API base URL.
pub const API_URL_ENV_VAR: &str = "AGENT_REGISTRY_API_URL";

/// Chain used when the caller does not pick one.
pub const DEFAULT_CHAIN_ID: u64 = 8453;

const DEFAULT_API_BASE_URL: &str = "https://api.agentcards.io/v1";

/// Caller-supplied overrides for [`resolve_config`].
///
/// Unset fields fall back to environment variables, then to the chain
/// preset.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub chain_id: Option<u64>,
    pub rpc_url: Option<String>,
    pub failover_rpc_urls: Option<Vec<String>>,
    pub registry_address: Option<String>,
    pub api_base_url: Option<String>,
    pub rpc_timeout_secs: Option<u64>,
    pub confirmation_blocks: Option<u32>,
}

/// Known registry deployments: (rpc_url, registry_address).
fn preset(chain_id: u64) -> Option<(&'static str, &'static str)> {
    match chain_id {
        // Base mainnet
        8453 => Some((
            "https://mainnet.base.org",
            "0x8004a169fb4a3325136eba0b57b2aee83bb3b26e",
        )),
        // Base Sepolia
        84532 => Some((
            "https://sepolia.base.org",
            "0x8004a7cc9bd43d3a9a1d6ebcf1d8c11f62f3e7bd",
        )),
        // Local Anvil node, first deterministic deployment
        31337 => Some((
            "http://127.0.0.1:8545",
            "0x5fbdb2315678afecb367f032d93f642f64180aa3",
        )),
        _ => None,
    }
}

/// Resolve a full [`RegistryConfig`] from presets, environment, and caller
/// overrides.
///
/// An unknown chain ID is accepted as long as the RPC endpoint and registry
/// address are supplied explicitly; otherwise validation rejects the result
/// and names the missing fields.
pub fn resolve_config(overrides: ConfigOverrides) -> Result<RegistryConfig> {
    let chain_id = overrides.chain_id.unwrap_or(DEFAULT_CHAIN_ID);
    let mut config = RegistryConfig {
        chain_id,
        api_base_url: DEFAULT_API_BASE_URL.to_string(),
        ..RegistryConfig::default()
    };

    if let Some((rpc_url, registry_address)) = preset(chain_id) {
        config.rpc_url = rpc_url.to_string();
        config.registry_address = registry_address.to_string();
    }

    // Environment beats presets.
    if let Ok(url) = std::env::var(RPC_URL_ENV_VAR) {
        config.rpc_url = url;
    }
    if let Ok(address) = std::env::var(REGISTRY_ADDRESS_ENV_VAR) {
        config.registry_address = address;
    }
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        config.api_base_url = url;
    }

    // Explicit overrides beat everything.
    if let Some(url) = overrides.rpc_url {
        config.rpc_url = url;
    }
    if let Some(urls) = overrides.failover_rpc_urls {
        config.failover_rpc_urls = urls;
    }
    if let Some(address) = overrides.registry_address {
        config.registry_address = address;
    }
    if let Some(url) = overrides.api_base_url {
        config.api_base_url = url;
    }
    if let Some(secs) = overrides.rpc_timeout_secs {
        config.rpc_timeout_secs = secs;
    }
    if let Some(blocks) = overrides.confirmation_blocks {
        config.confirmation_blocks = blocks;
    }

    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn resolves_known_chain_preset() {
        let config = resolve_config(ConfigOverrides {
            chain_id: Some(84532),
            ..ConfigOverrides::default()
        })
        .unwrap();

        assert_eq!(config.chain_id, 84532);
        assert_eq!(config.rpc_url, "https://sepolia.base.org");
        assert!(config.registry_address.starts_with("0x8004"));
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn explicit_overrides_beat_presets() {
        let config = resolve_config(ConfigOverrides {
            chain_id: Some(84532),
            rpc_url: Some("https://rpc.internal:8545".to_string()),
            confirmation_blocks: Some(1),
            ..ConfigOverrides::default()
        })
        .unwrap();

        assert_eq!(config.rpc_url, "https://rpc.internal:8545");
        assert_eq!(config.confirmation_blocks, 1);
        // The rest of the preset survives.
        assert!(config.registry_address.starts_with("0x8004"));
    }

    #[test]
    fn unknown_chain_requires_explicit_endpoints() {
        let err = resolve_config(ConfigOverrides {
            chain_id: Some(99_999),
            ..ConfigOverrides::default()
        })
        .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Validation);
        let fields = err.fields().unwrap();
        assert!(fields.contains(&"rpc_url".to_string()));
        assert!(fields.contains(&"registry_address".to_string()));
    }

    #[test]
    fn unknown_chain_with_explicit_endpoints_resolves() {
        let config = resolve_config(ConfigOverrides {
            chain_id: Some(99_999),
            rpc_url: Some("http://10.0.0.5:8545".to_string()),
            registry_address: Some("0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string()),
            ..ConfigOverrides::default()
        })
        .unwrap();

        assert_eq!(config.chain_id, 99_999);
    }
}
