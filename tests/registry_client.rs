//! Integration tests for client construction and RPC failure behavior.

mod common;

use erc8004_client::{resolve_config, AgentId, ConfigOverrides, ErrorCode, Registry};

fn offline_overrides() -> ConfigOverrides {
    // Ports 9 and 10 are reserved; nothing answers there.
    ConfigOverrides {
        chain_id: Some(31337),
        rpc_url: Some("http://127.0.0.1:9".to_string()),
        failover_rpc_urls: Some(vec!["http://127.0.0.1:10".to_string()]),
        ..ConfigOverrides::default()
    }
}

#[tokio::test]
async fn connect_succeeds_with_an_unreachable_rpc() {
    common::init_tracing();
    // Chain verification degrades to a warning; construction must not fail.
    let config = resolve_config(offline_overrides()).unwrap();
    let result = Registry::connect(config).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn reads_against_an_unreachable_rpc_are_rpc_errors() {
    let config = resolve_config(offline_overrides()).unwrap();
    let registry = Registry::connect(config).await.unwrap();

    let err = registry.get_registration_fee().await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::Rpc);
    assert!(err.is_retryable());
    assert!(err.to_string().contains("all RPC endpoints failed"));
}

#[tokio::test]
async fn writes_without_a_wallet_are_validation_errors() {
    let config = resolve_config(offline_overrides()).unwrap();
    let registry = Registry::connect(config).await.unwrap();

    let err = registry
        .unset_agent_wallet(AgentId::from(1u64))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::Validation);
    assert_eq!(err.fields(), Some(&["wallet".to_string()][..]));
    assert!(!err.is_retryable());

    let err = registry
        .set_metadata(AgentId::from(1u64), "model", b"v2".to_vec())
        .await
        .unwrap_err();
    assert_eq!(err.fields(), Some(&["wallet".to_string()][..]));
}

#[tokio::test]
async fn register_rejects_a_malformed_uri_before_touching_the_chain() {
    let config = resolve_config(offline_overrides()).unwrap();
    let registry = Registry::connect(config).await.unwrap();

    let err = registry.register_agent("not a url").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Validation);
    assert_eq!(err.fields(), Some(&["agent_uri".to_string()][..]));
}
