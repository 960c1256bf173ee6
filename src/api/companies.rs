use super::error::ClientError;
use super::http_client::ApiClient;
use super::types::Company;
use async_trait::async_trait;
use reqwest::Method;

#[async_trait]
pub trait CompanyApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Company>, ClientError>;
    async fn get(&self, id: i64) -> Result<Company, ClientError>;
    async fn create(&self, payload: &Company) -> Result<Company, ClientError>;
    /// PATCH: only the fields present in `payload` are written.
    async fn update(&self, id: i64, payload: &Company) -> Result<Company, ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}

/// `/companies/` resource
#[derive(Debug, Clone)]
pub struct CompanyClient {
    http: ApiClient,
}

impl CompanyClient {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }
}

fn company_path(id: i64) -> String {
    format!("/companies/{}/", id)
}

#[async_trait]
impl CompanyApi for CompanyClient {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Company>, ClientError> {
        self.http.get_json("list_companies", "/companies/").await
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: i64) -> Result<Company, ClientError> {
        self.http.get_json("get_company", &company_path(id)).await
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create(&self, payload: &Company) -> Result<Company, ClientError> {
        self.http
            .send_json(Method::POST, "create_company", "/companies/", payload)
            .await
    }

    #[tracing::instrument(skip(self, payload))]
    async fn update(&self, id: i64, payload: &Company) -> Result<Company, ClientError> {
        self.http
            .send_json(Method::PATCH, "update_company", &company_path(id), payload)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.http.delete(&company_path(id)).await
    }
}
