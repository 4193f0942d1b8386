//! HTTP client for the agent-card hosting API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{api_error, RegistryError, Result};

/// Thin JSON client for the agent-card hosting API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// POST a JSON body to a path under the base URL and decode the JSON
    /// response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        decode_response(resp).await
    }

    /// PUT a JSON body to an absolute URL and decode the JSON response.
    ///
    /// Used for updates addressed at a previously hosted document rather
    /// than a path under the base URL.
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .client
            .put(url)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        decode_response(resp).await
    }
}

/// Shape a transport-level failure (no HTTP response at all) into the API
/// error taxonomy. Status 0 marks "no response received".
fn transport_error(url: &str, err: reqwest::Error) -> RegistryError {
    api_error(
        format!("request to {} failed: {}", url, err),
        0,
        json!({ "error": err.to_string() }),
    )
}

async fn decode_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status().as_u16();
    let url = resp.url().to_string();
    let text = resp.text().await.map_err(|e| transport_error(&url, e))?;

    if !(200..300).contains(&status) {
        return Err(response_error(status, &text));
    }

    serde_json::from_str(&text).map_err(|e| {
        api_error(
            format!("invalid response body from {}: {}", url, e),
            status,
            Value::String(text),
        )
    })
}

/// Shape a non-2xx response into the API error taxonomy, preserving the raw
/// body (parsed as JSON when possible).
pub(crate) fn response_error(status: u16, body_text: &str) -> RegistryError {
    let body = serde_json::from_str::<Value>(body_text)
        .unwrap_or_else(|_| Value::String(body_text.to_string()));
    api_error(
        format!("API request failed with status {}", status),
        status,
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetails;

    #[test]
    fn json_error_bodies_are_parsed() {
        let err = response_error(429, r#"{"error":"rate limited"}"#);
        assert_eq!(err.status(), Some(429));
        assert_eq!(
            serde_json::to_value(err.details()).unwrap(),
            json!({ "status": 429, "body": { "error": "rate limited" } })
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn non_json_bodies_are_preserved_as_strings() {
        let err = response_error(500, "upstream exploded");
        match err.details() {
            ErrorDetails::Api { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, &Value::String("upstream exploded".to_string()));
            }
            other => panic!("expected API details, got {:?}", other),
        }
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client = ApiClient::new("http://127.0.0.1:8080/v1/");
        assert_eq!(client.base_url, "http://127.0.0.1:8080/v1");
    }
}
