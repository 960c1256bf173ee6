use super::error::ClientError;
use super::http_client::ApiClient;
use super::types::{AnalysisRequest, Document, DocumentContent, DocumentQuery, SendOverride, StatusReport};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

#[async_trait]
pub trait DocumentApi: Send + Sync {
    async fn list_documents(&self, query: &DocumentQuery) -> Result<Vec<Document>, ClientError>;
    async fn get_document(&self, id: i64) -> Result<Document, ClientError>;
    async fn create_document(&self, payload: &Document) -> Result<Document, ClientError>;
    async fn update_document(&self, id: i64, payload: &Document) -> Result<Document, ClientError>;
    async fn delete_document(&self, id: i64) -> Result<(), ClientError>;

    async fn get_content(&self, id: i64) -> Result<DocumentContent, ClientError>;
    /// Replaces the content sub-resource (PUT).
    async fn set_content(&self, id: i64, content: &DocumentContent) -> Result<DocumentContent, ClientError>;

    async fn send_to_zapsign(&self, id: i64, body: &SendOverride) -> Result<Document, ClientError>;
    async fn get_status(&self, id: i64) -> Result<StatusReport, ClientError>;
    /// The result is opaque; callers display it as-is.
    async fn analyze(&self, id: i64, text: &str) -> Result<Value, ClientError>;
}

/// `/documents/` resource and its content/action sub-routes
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: ApiClient,
}

impl DocumentClient {
    pub fn new(http: ApiClient) -> Self {
        Self { http }
    }
}

fn document_path(id: i64, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("/documents/{}/{}/", id, action),
        None => format!("/documents/{}/", id),
    }
}

#[async_trait]
impl DocumentApi for DocumentClient {
    #[tracing::instrument(skip(self))]
    async fn list_documents(&self, query: &DocumentQuery) -> Result<Vec<Document>, ClientError> {
        self.http
            .get_json_with_query("list_documents", "/documents/", query)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_document(&self, id: i64) -> Result<Document, ClientError> {
        self.http.get_json("get_document", &document_path(id, None)).await
    }

    #[tracing::instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create_document(&self, payload: &Document) -> Result<Document, ClientError> {
        self.http
            .send_json(Method::POST, "create_document", "/documents/", payload)
            .await
    }

    #[tracing::instrument(skip(self, payload))]
    async fn update_document(&self, id: i64, payload: &Document) -> Result<Document, ClientError> {
        self.http
            .send_json(Method::PATCH, "update_document", &document_path(id, None), payload)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_document(&self, id: i64) -> Result<(), ClientError> {
        self.http.delete(&document_path(id, None)).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_content(&self, id: i64) -> Result<DocumentContent, ClientError> {
        self.http
            .get_json("get_content", &document_path(id, Some("content")))
            .await
    }

    #[tracing::instrument(skip(self, content), fields(content_type = ?content.content_type))]
    async fn set_content(&self, id: i64, content: &DocumentContent) -> Result<DocumentContent, ClientError> {
        self.http
            .send_json(Method::PUT, "set_content", &document_path(id, Some("content")), content)
            .await
    }

    #[tracing::instrument(skip(self, body))]
    async fn send_to_zapsign(&self, id: i64, body: &SendOverride) -> Result<Document, ClientError> {
        self.http
            .send_json(
                Method::POST,
                "send_to_zapsign",
                &document_path(id, Some("send_to_zapsign")),
                body,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_status(&self, id: i64) -> Result<StatusReport, ClientError> {
        self.http
            .get_json("get_status", &document_path(id, Some("status")))
            .await
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    async fn analyze(&self, id: i64, text: &str) -> Result<Value, ClientError> {
        self.http
            .send_json(
                Method::POST,
                "analyze",
                &document_path(id, Some("analysis")),
                &AnalysisRequest { text },
            )
            .await
    }
}
