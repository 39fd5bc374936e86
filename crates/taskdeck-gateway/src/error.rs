use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl GatewayError {
    /// Whether the failure was the request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, GatewayError::Http(e) if e.is_timeout())
    }
}
