use crate::api::{
    ApiClient, ClientError, CompanyApi, CompanyClient, Document, DocumentApi, DocumentClient, DocumentContent,
    DocumentQuery,
};
use crate::config::{AppConfig, ConfigError};
use crate::screens::{
    CompanyForm, CompanyList, DocumentForm, DocumentList, Paginator, SignerFields, Sort,
};
use crate::ui::{ClipboardError, Ui};
use serde::Serialize;
use std::sync::Arc;

/// Everything a command needs: the backend seams and the host capabilities
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyApi>,
    pub documents: Arc<dyn DocumentApi>,
    pub ui: Ui,
}

impl AppState {
    pub fn from_config(config: &AppConfig, ui: Ui) -> Result<Self, CommandError> {
        let http = ApiClient::new(&config.api_base)?;
        tracing::debug!(api_base = http.base_url(), "Backend client ready");
        Ok(Self {
            companies: Arc::new(CompanyClient::new(http.clone())),
            documents: Arc::new(DocumentClient::new(http)),
            ui,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CommandError {
    message: String,
}

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<ConfigError> for CommandError {
    fn from(e: ConfigError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

impl From<ClipboardError> for CommandError {
    fn from(e: ClipboardError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

impl From<ClientError> for CommandError {
    fn from(e: ClientError) -> Self {
        CommandError {
            message: e.to_string(),
        }
    }
}

/// Field values supplied for a company; `None` keeps what the form already holds
#[derive(Debug, Clone, Default)]
pub struct CompanyInput {
    pub name: Option<String>,
    pub api_token: Option<String>,
}

/// Field values supplied for a document; `None` keeps what the form already holds
#[derive(Debug, Clone, Default)]
pub struct DocumentInput {
    pub company: Option<i64>,
    pub name: Option<String>,
    pub created_by: Option<String>,
    pub external_id: Option<String>,
    pub signers: Option<Vec<SignerFields>>,
    pub content: Option<DocumentContent>,
}

// Company commands
pub async fn list_companies(state: &AppState, paginator: Paginator) -> CompanyList {
    let mut list = CompanyList::new(state.companies.clone(), state.ui.clone());
    list.paginator = paginator;
    list.activate().await;
    list
}

pub async fn show_company(state: &AppState, id: i64) -> Result<CompanyForm, CommandError> {
    let mut form = CompanyForm::new(state.companies.clone(), state.ui.clone());
    form.activate(Some(id)).await;
    if form.company.is_none() {
        return Err(CommandError::new(format!("company {} could not be loaded", id)));
    }
    Ok(form)
}

pub async fn save_company(
    state: &AppState,
    id: Option<i64>,
    input: CompanyInput,
) -> Result<CompanyForm, CommandError> {
    let mut form = CompanyForm::new(state.companies.clone(), state.ui.clone());
    form.activate(id).await;
    if id.is_some() && form.id.is_none() {
        return Err(CommandError::new("invalid company id"));
    }
    if let (Some(id), None) = (form.id, form.company.as_ref()) {
        return Err(CommandError::new(format!("company {} could not be loaded", id)));
    }

    if let Some(name) = input.name {
        form.form.name = name;
    }
    if let Some(api_token) = input.api_token {
        form.form.api_token = api_token;
    }
    if !form.form.is_valid() {
        return Err(CommandError::new("name and api_token are required"));
    }

    form.save().await;
    Ok(form)
}

pub async fn delete_company(state: &AppState, id: i64) -> Result<CompanyList, CommandError> {
    let mut list = CompanyList::new(state.companies.clone(), state.ui.clone());
    list.activate().await;
    let company = list
        .rows
        .iter()
        .find(|c| c.id == Some(id))
        .cloned()
        .ok_or_else(|| CommandError::new(format!("company {} not found", id)))?;
    list.remove(&company).await;

    // Declined or failed deletes leave the row in place
    if list.rows.iter().any(|c| c.id == Some(id)) {
        return Err(CommandError::new(format!("company {} was not deleted", id)));
    }
    Ok(list)
}

pub async fn copy_company_token(state: &AppState, id: i64) -> Result<(), CommandError> {
    let mut list = CompanyList::new(state.companies.clone(), state.ui.clone());
    list.activate().await;
    let company = list
        .rows
        .iter()
        .find(|c| c.id == Some(id))
        .ok_or_else(|| CommandError::new(format!("company {} not found", id)))?;
    list.copy(&company.api_token)?;
    Ok(())
}

// Document commands
pub async fn list_documents(
    state: &AppState,
    query: DocumentQuery,
    sort: Option<Sort>,
    paginator: Paginator,
) -> DocumentList {
    let mut list = DocumentList::new(state.documents.clone(), state.ui.clone());
    list.query = query;
    list.sort = sort;
    list.paginator = paginator;
    list.activate().await;
    list
}

/// Open the form on a stored document. Fails unless both the document and its content
/// (or the absence of content) were read from the backend.
pub async fn show_document(state: &AppState, id: i64) -> Result<DocumentForm, CommandError> {
    let mut form = DocumentForm::new(state.documents.clone(), state.companies.clone(), state.ui.clone());
    form.activate(Some(id)).await;
    if form.doc.is_none() {
        return Err(CommandError::new(format!("document {} could not be loaded", id)));
    }
    if let Some(e) = &form.content_error {
        return Err(CommandError::new(format!("content of document {} could not be loaded: {}", id, e)));
    }
    Ok(form)
}

pub async fn save_document(
    state: &AppState,
    id: Option<i64>,
    input: DocumentInput,
) -> Result<DocumentForm, CommandError> {
    let mut form = DocumentForm::new(state.documents.clone(), state.companies.clone(), state.ui.clone());
    form.activate(id).await;
    if let Some(id) = id {
        if form.doc.is_none() {
            return Err(CommandError::new(format!("document {} could not be loaded", id)));
        }
        // Saving would write the default body over the stored one unless new content is given
        if input.content.is_none() {
            if let Some(e) = &form.content_error {
                return Err(CommandError::new(format!(
                    "content of document {} could not be loaded: {}",
                    id, e
                )));
            }
        }
    }

    if input.company.is_some() {
        form.form.company = input.company;
    }
    if let Some(name) = input.name {
        form.form.name = name;
    }
    if let Some(created_by) = input.created_by {
        form.form.created_by = created_by;
    }
    if let Some(external_id) = input.external_id {
        form.form.external_id = external_id;
    }
    if let Some(signers) = input.signers {
        form.form.signers = signers;
    }
    if let Some(content) = input.content {
        form.content = content;
    }
    if !form.form.is_valid() {
        return Err(CommandError::new(
            "company, name and at least one signer with name and email are required",
        ));
    }

    form.save().await;
    Ok(form)
}

pub async fn delete_document(state: &AppState, id: i64) -> Result<DocumentList, CommandError> {
    let mut list = DocumentList::new(state.documents.clone(), state.ui.clone());
    list.activate().await;
    let document = list
        .rows
        .iter()
        .find(|d| d.id == Some(id))
        .cloned()
        .ok_or_else(|| CommandError::new(format!("document {} not found", id)))?;
    list.remove(&document).await;

    if list.rows.iter().any(|d| d.id == Some(id)) {
        return Err(CommandError::new(format!("document {} was not deleted", id)));
    }
    Ok(list)
}

/// Send through the form so the stored content is saved first and non-drafts are refused
pub async fn send_document(state: &AppState, id: i64) -> Result<DocumentForm, CommandError> {
    let mut form = show_document(state, id).await?;
    let was_draft = form.doc.as_ref().is_some_and(Document::is_draft);

    form.send_now().await;

    if !was_draft {
        return Err(CommandError::new(format!("document {} is not a draft", id)));
    }
    // A successful send replaces the draft with the provider's copy
    if form.doc.as_ref().is_some_and(Document::is_draft) {
        return Err(CommandError::new(format!("document {} was not sent", id)));
    }
    Ok(form)
}

/// Poll signature status from the list and return the refreshed table
pub async fn refresh_status(state: &AppState, id: i64) -> Result<DocumentList, CommandError> {
    let mut list = DocumentList::new(state.documents.clone(), state.ui.clone());
    list.activate().await;
    let document = list
        .rows
        .iter()
        .find(|d| d.id == Some(id))
        .cloned()
        .ok_or_else(|| CommandError::new(format!("document {} not found", id)))?;
    list.status(&document).await;

    if list.last_status.is_none() {
        return Err(CommandError::new(format!("status of document {} could not be queried", id)));
    }
    Ok(list)
}

pub async fn analyze_document(state: &AppState, id: i64) -> Result<DocumentForm, CommandError> {
    let mut form = show_document(state, id).await?;
    form.analyze_now().await;
    if form.analysis.is_none() {
        return Err(CommandError::new(format!("analysis of document {} failed", id)));
    }
    Ok(form)
}
