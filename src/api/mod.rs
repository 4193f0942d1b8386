//! Agent-card hosting API client.

pub mod client;

pub use client::ApiClient;
