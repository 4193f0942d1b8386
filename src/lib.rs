//! Client SDK for an ERC-8004 agent identity registry.
//!
//! Register agents, manage wallets & metadata.
//!
//! # Quick start
//!
//! ```no_run
//! use erc8004_client::{AgentCard, ConfigOverrides, Registry, Wallet};
//!
//! #[tokio::main]
//! async fn main() -> erc8004_client::Result<()> {
//!     let config = erc8004_client::resolve_config(ConfigOverrides {
//!         chain_id: Some(84532),
//!         ..ConfigOverrides::default()
//!     })?;
//!     let wallet = Wallet::from_env()?;
//!     let registry = Registry::connect_with_wallet(config, wallet).await?;
//!
//!     let card = AgentCard::new("trader", "autonomous market maker");
//!     let uri = registry.create_agent_uri(&card).await?;
//!     let registration = registry.register_agent(&uri).await?;
//!     println!("registered agent {}", registration.agent_id);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod api;
pub mod chain;
pub mod config;
pub mod error;
pub mod registry;

// ── Configuration ──
pub use config::{load_config, resolve_config, ConfigOverrides, RegistryConfig};
// ── Errors ──
pub use error::{api_error, rpc_error, validation_error};
pub use error::{ErrorCode, ErrorDetails, RegistryError, Result};
// ── Registry client: agent URI, registration, on-chain reads, wallet, metadata ──
pub use registry::Registry;
// ── Agent records ──
pub use agent::{Agent, AgentCard, AgentId, Registration};
// ── Chain plumbing ──
pub use chain::{ConfirmationStatus, Wallet};
