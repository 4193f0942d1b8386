//! On-chain plumbing for the registry client.
//!
//! # Data Flow
//! ```text
//! RegistryConfig (endpoints, contract address)
//!     → wallet.rs (key loading)
//!     → client.rs (RPC connection with timeouts and failover)
//!     → tx.rs (build, sign, broadcast, confirm)
//!     → contract.rs (registry ABI)
//! ```
//!
//! # Security Constraints
//! - Private keys only from the environment or explicit caller input
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod contract;
pub mod tx;
pub mod wallet;

pub use client::ChainClient;
pub use tx::{ConfirmationStatus, TxSender};
pub use wallet::Wallet;
