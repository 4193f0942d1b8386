//! Signer management for registry write operations.
//!
//! # Security
//! - Private keys are loaded only from an explicit hex string or the
//!   environment variable
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::error::{validation_error, Result};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "AGENT_REGISTRY_PRIVATE_KEY";

/// Local signing key used for registry write operations.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string (with or
    /// without the 0x prefix).
    pub fn from_private_key(private_key_hex: &str) -> Result<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex.parse().map_err(|e| {
            validation_error(format!("invalid private key format: {}", e), ["private_key"])
        })?;

        tracing::info!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// Load the wallet from the `AGENT_REGISTRY_PRIVATE_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            validation_error(
                format!("environment variable {} not set", PRIVATE_KEY_ENV_VAR),
                ["private_key"],
            )
        })?;

        Self::from_private_key(&private_key)
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The signer wrapped for use by a sending provider.
    pub(crate) fn network_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn wallet_from_private_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn wallet_with_0x_prefix() {
        let wallet = Wallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(
            wallet.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn invalid_private_key_is_a_validation_error() {
        let err = Wallet::from_private_key("invalid_key").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Validation);
        assert_eq!(err.fields(), Some(&["private_key".to_string()][..]));
    }
}
