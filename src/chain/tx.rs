//! Transaction submission and confirmation monitoring.
//!
//! # Responsibilities
//! - Build registry calls into transaction requests
//! - Enforce the gas price cap before broadcasting
//! - Sign and broadcast through a wallet-backed provider
//! - Poll receipts until the configured confirmation depth

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use serde_json::json;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::client::ChainClient;
use crate::chain::wallet::Wallet;
use crate::config::RegistryConfig;
use crate::error::{rpc_error, Result};

/// Confirmation outcome of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Mined and buried under the required confirmation depth.
    Confirmed { block_number: u64 },
    /// Mined but reverted.
    Failed(String),
}

/// Sends registry transactions through a wallet-backed provider.
#[derive(Clone)]
pub struct TxSender {
    chain: ChainClient,
    sender: DynProvider,
    from: Address,
    timeout_duration: Duration,
    gas_price_multiplier: f64,
    max_gas_price_gwei: u64,
    confirmation_blocks: u32,
    confirmation_timeout_secs: u64,
}

impl TxSender {
    /// Create a sender for the wallet over the configured RPC endpoint.
    pub fn new(chain: ChainClient, wallet: Wallet, config: &RegistryConfig) -> Result<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            rpc_error(
                format!("invalid RPC URL '{}': {}", config.rpc_url, e),
                json!({ "rpc_url": config.rpc_url }),
            )
        })?;
        let sender = ProviderBuilder::new()
            .wallet(wallet.network_wallet())
            .connect_http(url)
            .erased();

        Ok(Self {
            chain,
            sender,
            from: wallet.address(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            gas_price_multiplier: config.gas_price_multiplier,
            max_gas_price_gwei: config.max_gas_price_gwei,
            confirmation_blocks: config.confirmation_blocks,
            confirmation_timeout_secs: config.confirmation_timeout_secs,
        })
    }

    /// Submit a call and return the transaction hash.
    ///
    /// Queries the current gas price, refuses to send above the configured
    /// cap, and applies the safety multiplier.
    pub async fn send(&self, to: Address, value: U256, data: Bytes) -> Result<TxHash> {
        let gas_price = self.chain.get_gas_price().await?;
        ensure_gas_price(gas_price, self.max_gas_price_gwei)?;
        let adjusted_gas_price = (gas_price as f64 * self.gas_price_multiplier) as u128;

        let tx = TransactionRequest::default()
            .with_to(to)
            .with_value(value)
            .with_input(data)
            .with_gas_price(adjusted_gas_price);

        let pending = timeout(self.timeout_duration, self.sender.send_transaction(tx))
            .await
            .map_err(|_| {
                rpc_error(
                    "transaction submission timed out",
                    json!({ "method": "eth_sendRawTransaction", "to": to.to_string() }),
                )
            })?
            .map_err(|e| {
                rpc_error(
                    format!("transaction submission failed: {}", e),
                    json!({ "method": "eth_sendRawTransaction", "to": to.to_string() }),
                )
            })?;

        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, from = %self.from, to = %to, "Transaction submitted");
        Ok(tx_hash)
    }

    /// Wait for a transaction to reach the configured confirmation depth.
    pub async fn wait_for_confirmation(&self, tx_hash: TxHash) -> Result<ConfirmationStatus> {
        let required = self.confirmation_blocks;
        let poll_interval = Duration::from_secs(2);

        let result = timeout(
            Duration::from_secs(self.confirmation_timeout_secs),
            async {
                let mut ticker = interval(poll_interval);

                loop {
                    ticker.tick().await;

                    let receipt = match self.chain.get_transaction_receipt(tx_hash).await? {
                        Some(r) => r,
                        None => {
                            tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                            continue;
                        }
                    };

                    if !receipt.status() {
                        return Ok(ConfirmationStatus::Failed(
                            "transaction reverted".to_string(),
                        ));
                    }

                    let current_block = self.chain.get_block_number().await?;
                    let tx_block = receipt.block_number.unwrap_or(current_block);
                    let confirmations = current_block.saturating_sub(tx_block) as u32;

                    if confirmations >= required {
                        return Ok(ConfirmationStatus::Confirmed {
                            block_number: tx_block,
                        });
                    }

                    tracing::debug!(
                        tx_hash = %tx_hash,
                        confirmations = confirmations,
                        required = required,
                        "Waiting for confirmations"
                    );
                }
            },
        )
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(rpc_error(
                format!(
                    "transaction not confirmed after {} seconds",
                    self.confirmation_timeout_secs
                ),
                json!({ "tx_hash": tx_hash.to_string(), "required_confirmations": required }),
            )),
        }
    }

    /// Submit a call and wait until it is confirmed, returning the receipt.
    ///
    /// A reverted transaction surfaces as an RPC error carrying the hash.
    pub async fn send_confirmed(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<TransactionReceipt> {
        let tx_hash = self.send(to, value, data).await?;

        match self.wait_for_confirmation(tx_hash).await? {
            ConfirmationStatus::Confirmed { block_number } => {
                tracing::info!(tx_hash = %tx_hash, block_number = block_number, "Transaction confirmed");
                self.chain
                    .get_transaction_receipt(tx_hash)
                    .await?
                    .ok_or_else(|| {
                        rpc_error(
                            "confirmed transaction has no receipt",
                            json!({ "tx_hash": tx_hash.to_string() }),
                        )
                    })
            }
            ConfirmationStatus::Failed(reason) => Err(rpc_error(
                format!("transaction failed: {}", reason),
                json!({ "tx_hash": tx_hash.to_string() }),
            )),
        }
    }
}

impl std::fmt::Debug for TxSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxSender")
            .field("from", &self.from)
            .field("confirmation_blocks", &self.confirmation_blocks)
            .field("max_gas_price_gwei", &self.max_gas_price_gwei)
            .finish()
    }
}

/// Refuse to send when the quoted gas price exceeds the configured cap.
fn ensure_gas_price(gas_price_wei: u128, max_gwei: u64) -> Result<()> {
    let gwei = gas_price_wei / 1_000_000_000;
    if gwei > max_gwei as u128 {
        return Err(rpc_error(
            format!("gas price {} gwei exceeds maximum {} gwei", gwei, max_gwei),
            json!({ "current_gwei": gwei as u64, "max_gwei": max_gwei }),
        ));
    }
    Ok(())
}
