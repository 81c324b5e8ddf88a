use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Failed(String),
    #[error("Unknown error")]
    Unknown,
}

/// Carries an encoded order to the remote endpoint.
#[async_trait]
pub trait OrderTransport: Send + Sync {
    /// POST `body` as `application/json` and return the raw response body.
    ///
    /// A response with any status counts as delivered; only the absence of a
    /// response is an error.
    async fn post_json(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError>;
}
