use async_trait::async_trait;
use cupcake_core::{OrderTransport, TransportError};
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

pub use cupcake_core::app_config::DEFAULT_ENDPOINT;

/// POSTs orders over HTTP with the client's default timeouts.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl OrderTransport for HttpTransport {
    async fn post_json(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Failed(e.to_string()))?;

        debug!("POST {} -> {}", self.endpoint, response.status());

        // Error statuses still carry a body worth showing.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Failed(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(HttpTransport::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(format!("http://{}/api/cupcakes", addr));
        let result = transport.post_json(b"{}".to_vec()).await;
        assert!(matches!(result, Err(TransportError::Failed(_))));
    }
}
