use async_trait::async_trait;
use reqwest::Response;

/// Failure of a single backend call. Screens collapse every variant into one failure branch.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status: {status_code} {message}")]
    Status { status_code: u16, message: String },
    #[error("unable to parse response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status_code, .. } => Some(*status_code),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            ClientError::Decode { .. } => None,
        }
    }
}

#[async_trait]
pub trait ResponseExt {
    /// Turn any non-2xx response into `ClientError::Status`, keeping the body as the message.
    async fn map_client_error(self) -> Result<Response, ClientError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        if self.status().is_success() {
            return Ok(self);
        }
        Err(ClientError::Status {
            status_code: self.status().as_u16(),
            message: self.text().await.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ResponseExt for Result<Response, reqwest::Error> {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        match self {
            Ok(response) => response.map_client_error().await,
            Err(e) => Err(ClientError::Request(e)),
        }
    }
}
