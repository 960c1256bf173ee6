use super::error::{ClientError, ResponseExt};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP plumbing for the resource clients. One request per call, no retries, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(api_base: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` starts with a slash and keeps the backend's trailing slash, e.g. `/companies/3/`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T>(&self, endpoint: &'static str, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_client_error()
            .await?;

        decode(endpoint, response).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_client_error()
            .await?;

        decode(endpoint, response).await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        endpoint: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await
            .map_client_error()
            .await?;

        decode(endpoint, response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .map_client_error()
            .await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &'static str, response: reqwest::Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode { endpoint, source })
}
