use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Hypermedia links the backend attaches to every resource (`self`, `documents`, `send`, ...).
/// Read-only: never sent back.
pub type Links = BTreeMap<String, String>;

/// A company whose api_token the backend uses to reach the signature provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub api_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing)]
    pub links: Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Sent,
    Signed,
    Canceled,
    /// Anything the provider reports that the backend did not normalize
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Sent => "sent",
            DocumentStatus::Signed => "signed",
            DocumentStatus::Canceled => "canceled",
            DocumentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(DocumentStatus::Draft),
            "sent" => Ok(DocumentStatus::Sent),
            "signed" => Ok(DocumentStatus::Signed),
            "canceled" => Ok(DocumentStatus::Canceled),
            other => Err(format!("unknown document status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignerStatus {
    Pending,
    Signed,
    Rejected,
}

/// A named party who must sign a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SignerStatus>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub links: Links,
}

/// A contract routed through the signature provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub company: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub signers: Vec<Signer>,
    #[serde(default, skip_serializing)]
    pub links: Links,
}

impl Document {
    pub fn is_draft(&self) -> bool {
        self.status == Some(DocumentStatus::Draft)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    Markdown,
    UrlPdf,
}

/// Body of a document as stored by the backend. `content_type` decides which field counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentContent {
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing)]
    pub links: Links,
}

/// The field of a `DocumentContent` selected by its content type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBody<'a> {
    Markdown(&'a str),
    PdfUrl(&'a str),
}

impl<'a> ContentBody<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            ContentBody::Markdown(text) | ContentBody::PdfUrl(text) => text,
        }
    }
}

impl DocumentContent {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Markdown,
            markdown_text: Some(text.into()),
            pdf_url: Some(String::new()),
            links: Links::new(),
        }
    }

    pub fn pdf_url(url: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::UrlPdf,
            markdown_text: Some(String::new()),
            pdf_url: Some(url.into()),
            links: Links::new(),
        }
    }

    pub fn body(&self) -> ContentBody<'_> {
        match self.content_type {
            ContentType::Markdown => ContentBody::Markdown(self.markdown_text.as_deref().unwrap_or("")),
            ContentType::UrlPdf => ContentBody::PdfUrl(self.pdf_url.as_deref().unwrap_or("")),
        }
    }

    /// Only content whose selected field is non-blank is accepted by the backend.
    pub fn is_worth_persisting(&self) -> bool {
        !self.body().text().trim().is_empty()
    }
}

/// Filters accepted by the document list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

/// Optional content override for the send endpoint; serializes to `{}` when empty
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

/// Response of the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub document_id: i64,
    pub status: Option<DocumentStatus>,
    /// Provider payload, passed through untouched
    #[serde(default)]
    pub raw: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AnalysisRequest<'a> {
    pub text: &'a str,
}
