//! Upstream model listing client
//!
//! One GET against an OpenAI-compatible `/v1/models` endpoint per call. No
//! retries and no timeout beyond the client default.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::ModelId;
use crate::config::UpstreamSettings;
use crate::error::{FetchError, Result};

/// Anything that can produce the current model listing.
#[async_trait]
pub trait ModelSource: Send + Sync {
    async fn list_models(&self) -> Result<Vec<ModelId>>;
}

#[derive(Deserialize)]
struct ModelListResponse {
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    id: String,
}

/// Client for the configured model listing endpoint.
pub struct UpstreamClient {
    client: Client,
    url: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = build_http_client(settings.disable_system_proxy)?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: &UpstreamSettings) -> Self {
        Self {
            client,
            url: settings.url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

fn build_http_client(disable_system_proxy: bool) -> reqwest::Result<Client> {
    if disable_system_proxy || cfg!(test) {
        Client::builder().no_proxy().build()
    } else {
        Ok(Client::new())
    }
}

#[async_trait]
impl ModelSource for UpstreamClient {
    async fn list_models(&self) -> Result<Vec<ModelId>> {
        let response = self
            .client
            .get(&self.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let models = parse_model_list(&body)?;
        tracing::debug!(count = models.len(), url = %self.url, "Fetched model listing");
        Ok(models)
    }
}

/// Extract `data[*].id` from a listing body.
pub fn parse_model_list(body: &str) -> Result<Vec<ModelId>> {
    let value: Value = serde_json::from_str(body)?;
    let listing: ModelListResponse = serde_json::from_value(value).map_err(|err| {
        tracing::debug!(error = %err, "Model listing has unexpected shape");
        FetchError::UnexpectedShape
    })?;
    Ok(listing.data.into_iter().map(|entry| entry.id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> UpstreamSettings {
        UpstreamSettings {
            url: format!("{}/v1/models", server.uri()),
            api_key: "sk-test".to_string(),
            disable_system_proxy: true,
        }
    }

    #[test]
    fn test_parse_model_list() {
        let models = parse_model_list(
            r#"{"object":"list","data":[{"id":"gpt-4o","object":"model"},{"id":"claude-3-opus"}]}"#,
        )
        .unwrap();
        assert_eq!(models, vec!["gpt-4o", "claude-3-opus"]);
    }

    #[test]
    fn test_parse_empty_model_list() {
        assert!(parse_model_list(r#"{"data":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_model_list("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        for body in [r#"{"models":[]}"#, r#"{"data":{}}"#, r#"{"data":[{"name":"x"}]}"#, "[]"] {
            let err = parse_model_list(body).unwrap_err();
            assert!(matches!(err, FetchError::UnexpectedShape), "body: {}", body);
        }
    }

    #[tokio::test]
    async fn test_list_models_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "gpt-4o"}, {"id": "deepseek-chat"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&settings_for(&server)).unwrap();
        let models = client.list_models().await.unwrap();
        assert_eq!(models, vec!["gpt-4o", "deepseek-chat"]);
    }

    #[tokio::test]
    async fn test_list_models_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/models"))
            .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
            .mount(&server)
            .await;

        let client = UpstreamClient::new(&settings_for(&server)).unwrap();
        let err = client.list_models().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch models: Unauthorized");
    }

    #[tokio::test]
    async fn test_list_models_network_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let settings = UpstreamSettings {
            url: format!("http://127.0.0.1:{}/v1/models", port),
            api_key: String::new(),
            disable_system_proxy: true,
        };

        let client = UpstreamClient::new(&settings).unwrap();
        let err = client.list_models().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
