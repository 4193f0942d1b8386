//! Configuration validation.
//!
//! Semantic validation on top of serde's syntactic checks. Collects every
//! offending field so the caller sees all problems at once.

use alloy::primitives::Address;
use url::Url;

use crate::config::schema::RegistryConfig;
use crate::error::{validation_error, Result};

/// Validate a resolved configuration.
pub fn validate_config(config: &RegistryConfig) -> Result<()> {
    let mut fields = Vec::new();

    if config.chain_id == 0 {
        fields.push("chain_id");
    }
    if Url::parse(&config.rpc_url).is_err() {
        fields.push("rpc_url");
    }
    if config
        .failover_rpc_urls
        .iter()
        .any(|url| Url::parse(url).is_err())
    {
        fields.push("failover_rpc_urls");
    }
    if config.registry_address.parse::<Address>().is_err() {
        fields.push("registry_address");
    }
    if Url::parse(&config.api_base_url).is_err() {
        fields.push("api_base_url");
    }
    if config.rpc_timeout_secs == 0 {
        fields.push("rpc_timeout_secs");
    }
    if config.confirmation_blocks == 0 {
        fields.push("confirmation_blocks");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(validation_error(
            format!("invalid registry configuration: {}", fields.join(", ")),
            fields,
        ))
    }
}
