//! Identity registry contract interface.
//!
//! ABI definitions for the on-chain registry. Calls are encoded with
//! [`alloy::sol_types::SolCall`] and sent through [`crate::chain::ChainClient`]
//! or [`crate::chain::TxSender`].

use alloy::sol;

sol! {
    /// Emitted when a new agent is registered.
    #[derive(Debug)]
    event AgentRegistered(uint256 indexed agentId, address indexed owner, string agentURI);

    /// Emitted when an agent's wallet binding is cleared.
    #[derive(Debug)]
    event AgentWalletUnset(uint256 indexed agentId);

    /// Emitted when a metadata entry is written.
    #[derive(Debug)]
    event MetadataSet(uint256 indexed agentId, string key, bytes value);

    function registrationFee() external view returns (uint256);
    function registrationEnabled() external view returns (bool);
    function register(string agentURI) external payable returns (uint256 agentId);
    function getAgent(uint256 agentId) external view returns (address owner, address wallet, string agentURI);
    function agentWallet(uint256 agentId) external view returns (address);
    function unsetAgentWallet(uint256 agentId) external;
    function setMetadata(uint256 agentId, string key, bytes value) external;
}
