//! Registry RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoint
//! - Query chain state (block number, gas price, receipts)
//! - Execute read-only contract calls
//! - Handle timeouts and network errors gracefully

use alloy::primitives::{Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::RegistryConfig;
use crate::error::{rpc_error, RegistryError, Result};

/// JSON-RPC client wrapper with failover across configured endpoints.
#[derive(Clone)]
pub struct ChainClient {
    /// Providers in failover order (primary first).
    providers: Vec<Arc<dyn Provider + Send + Sync>>,
    /// Endpoint URL per provider, for logging and error details.
    endpoints: Vec<String>,
    /// Per-request timeout duration.
    timeout_duration: Duration,
}

impl ChainClient {
    /// Create a new chain client from a resolved configuration.
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let timeout_duration = Duration::from_secs(config.rpc_timeout_secs);
        let mut providers: Vec<Arc<dyn Provider + Send + Sync>> = Vec::new();
        let mut endpoints = Vec::new();

        let primary_url: url::Url = config.rpc_url.parse().map_err(|e| {
            rpc_error(
                format!("invalid RPC URL '{}': {}", config.rpc_url, e),
                json!({ "rpc_url": config.rpc_url }),
            )
        })?;
        providers.push(Arc::new(ProviderBuilder::new().connect_http(primary_url))
            as Arc<dyn Provider + Send + Sync>);
        endpoints.push(config.rpc_url.clone());

        for url_str in &config.failover_rpc_urls {
            if let Ok(url) = url_str.parse::<url::Url>() {
                providers.push(Arc::new(ProviderBuilder::new().connect_http(url))
                    as Arc<dyn Provider + Send + Sync>);
                endpoints.push(url_str.clone());
            } else {
                tracing::warn!(url = %url_str, "Ignoring invalid failover RPC URL");
            }
        }

        Ok(Self {
            providers,
            endpoints,
            timeout_duration,
        })
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> Result<u64> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_chain_id();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => {
                    tracing::warn!(endpoint = %self.endpoints[i], error = %e, "RPC error, trying next endpoint");
                }
                Err(_) => {
                    tracing::warn!(endpoint = %self.endpoints[i], "RPC timeout, trying next endpoint");
                }
            }
        }
        Err(self.exhausted("eth_chainId"))
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> Result<u64> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_block_number();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(endpoint = %self.endpoints[i], error = %e, "RPC error"),
                Err(_) => tracing::warn!(endpoint = %self.endpoints[i], "RPC timeout"),
            }
        }
        Err(self.exhausted("eth_blockNumber"))
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> Result<u128> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_gas_price();
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(endpoint = %self.endpoints[i], error = %e, "RPC error"),
                Err(_) => tracing::warn!(endpoint = %self.endpoints[i], "RPC timeout"),
            }
        }
        Err(self.exhausted("eth_gasPrice"))
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<TransactionReceipt>> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.get_transaction_receipt(tx_hash);
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(endpoint = %self.endpoints[i], error = %e, "RPC error"),
                Err(_) => tracing::warn!(endpoint = %self.endpoints[i], "RPC timeout"),
            }
        }
        Err(self.exhausted("eth_getTransactionReceipt"))
    }

    /// Execute a read-only contract call and return the raw result bytes.
    pub async fn call(&self, tx: TransactionRequest) -> Result<Bytes> {
        for (i, provider) in self.providers.iter().enumerate() {
            let fut = provider.call(tx.clone());
            match timeout(self.timeout_duration, fut).await {
                Ok(Ok(result)) => return Ok(result),
                Ok(Err(e)) => tracing::warn!(endpoint = %self.endpoints[i], error = %e, "RPC error"),
                Err(_) => tracing::warn!(endpoint = %self.endpoints[i], "RPC timeout"),
            }
        }
        Err(self.exhausted("eth_call"))
    }

    fn exhausted(&self, method: &str) -> RegistryError {
        rpc_error(
            format!("all RPC endpoints failed for {}", method),
            json!({ "method": method, "endpoints": self.endpoints }),
        )
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}
