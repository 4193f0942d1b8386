//! The registry client handle.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;

use crate::api::ApiClient;
use crate::chain::{ChainClient, TxSender, Wallet};
use crate::config::{validate_config, RegistryConfig};
use crate::error::{validation_error, Result};

/// Client handle for one registry deployment.
///
/// Read operations work without a wallet; write operations require
/// [`Registry::connect_with_wallet`].
pub struct Registry {
    pub(crate) config: RegistryConfig,
    pub(crate) chain: ChainClient,
    pub(crate) api: ApiClient,
    pub(crate) registry_address: Address,
    wallet: Option<Wallet>,
    tx: Option<TxSender>,
}

impl Registry {
    /// Connect a read-only client.
    pub async fn connect(config: RegistryConfig) -> Result<Self> {
        Self::build(config, None).await
    }

    /// Connect a client able to send registry transactions.
    pub async fn connect_with_wallet(config: RegistryConfig, wallet: Wallet) -> Result<Self> {
        Self::build(config, Some(wallet)).await
    }

    async fn build(config: RegistryConfig, wallet: Option<Wallet>) -> Result<Self> {
        validate_config(&config)?;

        let registry_address: Address = config.registry_address.parse().map_err(|e| {
            validation_error(
                format!(
                    "invalid registry address '{}': {}",
                    config.registry_address, e
                ),
                ["registry_address"],
            )
        })?;

        let chain = ChainClient::new(&config)?;

        // Verify the endpoint serves the configured chain. Degrade to a
        // warning when unreachable so offline construction still works.
        match chain.get_chain_id().await {
            Ok(actual) if actual != config.chain_id => {
                tracing::warn!(
                    expected = config.chain_id,
                    actual = actual,
                    "Chain ID mismatch on RPC endpoint"
                );
            }
            Ok(_) => {
                tracing::info!(
                    rpc_url = %config.rpc_url,
                    chain_id = config.chain_id,
                    registry = %registry_address,
                    "Registry client connected"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Registry client connected but chain verification failed"
                );
            }
        }

        let api = ApiClient::new(&config.api_base_url);
        let tx = match &wallet {
            Some(w) => Some(TxSender::new(chain.clone(), w.clone(), &config)?),
            None => None,
        };

        Ok(Self {
            config,
            chain,
            api,
            registry_address,
            wallet,
            tx,
        })
    }

    /// The resolved configuration this client runs with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The registry contract address.
    pub fn registry_address(&self) -> Address {
        self.registry_address
    }

    /// The sending wallet address, if this client has one.
    pub fn wallet_address(&self) -> Option<Address> {
        self.wallet.as_ref().map(|w| w.address())
    }

    /// The transaction sender, or a validation error for read-only clients.
    pub(crate) fn tx_sender(&self) -> Result<&TxSender> {
        self.tx.as_ref().ok_or_else(|| {
            validation_error(
                "a wallet is required for registry write operations",
                ["wallet"],
            )
        })
    }

    /// Execute a read-only call against the registry contract.
    pub(crate) async fn call_registry(&self, data: Vec<u8>) -> Result<Bytes> {
        let tx = TransactionRequest::default()
            .with_to(self.registry_address)
            .with_input(Bytes::from(data));
        self.chain.call(tx).await
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("chain_id", &self.config.chain_id)
            .field("registry", &self.registry_address)
            .field("has_wallet", &self.wallet.is_some())
            .finish()
    }
}
