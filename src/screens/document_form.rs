use super::analysis_dialog::AnalysisDialog;
use crate::api::{ClientError, Company, CompanyApi, Document, DocumentApi, DocumentContent, SendOverride, Signer};
use crate::routes::Route;
use crate::ui::Ui;
use std::sync::Arc;

pub const DEFAULT_MARKDOWN: &str = "# Contrato\n\nConteúdo mock.";

/// One signer row of the form. Both fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerFields {
    pub name: String,
    pub email: String,
}

impl SignerFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Document metadata fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFields {
    pub company: Option<i64>,
    pub name: String,
    pub created_by: String,
    pub external_id: String,
    pub signers: Vec<SignerFields>,
}

impl Default for DocumentFields {
    fn default() -> Self {
        Self {
            company: None,
            name: String::new(),
            created_by: String::new(),
            external_id: String::new(),
            // A fresh form starts with one empty signer row
            signers: vec![SignerFields::default()],
        }
    }
}

impl DocumentFields {
    /// Company and name required, at least one signer, every signer complete
    pub fn is_valid(&self) -> bool {
        self.company.is_some()
            && !self.name.trim().is_empty()
            && !self.signers.is_empty()
            && self.signers.iter().all(SignerFields::is_valid)
    }

    fn patch(&mut self, document: &Document) {
        self.company = Some(document.company);
        self.name = document.name.clone();
        self.created_by = document.created_by.clone().unwrap_or_default();
        self.external_id = document.external_id.clone().unwrap_or_default();
        self.signers = document
            .signers
            .iter()
            .map(|s| SignerFields::new(s.name.clone(), s.email.clone()))
            .collect();
    }

    fn to_payload(&self) -> Option<Document> {
        Some(Document {
            company: self.company?,
            name: self.name.clone(),
            created_by: Some(self.created_by.clone()),
            external_id: Some(self.external_id.clone()),
            signers: self
                .signers
                .iter()
                .map(|s| Signer {
                    name: s.name.clone(),
                    email: s.email.clone(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        })
    }
}

/// Create/edit screen for a document, its content and its signature actions
pub struct DocumentForm {
    documents: Arc<dyn DocumentApi>,
    companies_api: Arc<dyn CompanyApi>,
    ui: Ui,
    pub id: Option<i64>,
    /// Last copy of the document seen from the backend (status etc.)
    pub doc: Option<Document>,
    pub loading: bool,
    pub saving: bool,
    pub companies: Vec<Company>,
    pub form: DocumentFields,
    pub content: DocumentContent,
    /// Content load failure other than "no content yet"; `content` then holds defaults, not the stored body
    pub content_error: Option<ClientError>,
    /// Last analysis result shown
    pub analysis: Option<AnalysisDialog>,
}

impl DocumentForm {
    pub fn new(documents: Arc<dyn DocumentApi>, companies_api: Arc<dyn CompanyApi>, ui: Ui) -> Self {
        Self {
            documents,
            companies_api,
            ui,
            id: None,
            doc: None,
            loading: false,
            saving: false,
            companies: Vec::new(),
            form: DocumentFields::default(),
            content: DocumentContent::markdown(DEFAULT_MARKDOWN),
            content_error: None,
            analysis: None,
        }
    }

    /// Enter the screen: load the company picker, then with an id load the document and its content
    pub async fn activate(&mut self, id: Option<i64>) {
        self.id = id.filter(|id| *id > 0);

        match self.companies_api.list().await {
            Ok(companies) => {
                if self.form.company.is_none() {
                    self.form.company = companies.first().and_then(|c| c.id);
                }
                self.companies = companies;
            }
            Err(e) => tracing::warn!("Failed to load companies for picker: {}", e),
        }

        let Some(id) = self.id else {
            return;
        };

        self.loading = true;
        self.content_error = None;
        match self.documents.get_document(id).await {
            Ok(document) => {
                self.form.patch(&document);
                self.doc = Some(document);

                match self.documents.get_content(id).await {
                    Ok(content) => self.content = content,
                    // 404 when no content was ever set
                    Err(e) if e.status_code() == Some(404) => {
                        tracing::debug!("No content for document {}: {}", id, e)
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load content of document {}: {}", id, e);
                        self.content_error = Some(e);
                    }
                }
            }
            Err(e) => tracing::warn!("Failed to load document {}: {}", id, e),
        }
        self.loading = false;
    }

    pub fn add_signer(&mut self) {
        self.form.signers.push(SignerFields::default());
    }

    pub fn remove_signer(&mut self, index: usize) {
        if index < self.form.signers.len() {
            self.form.signers.remove(index);
        }
    }

    /// Persist metadata, then content when it is worth persisting
    pub async fn save(&mut self) {
        if !self.form.is_valid() {
            return;
        }
        let Some(payload) = self.form.to_payload() else {
            return;
        };
        self.saving = true;

        let saved = match self.id {
            Some(id) => self
                .documents
                .update_document(id, &payload)
                .await
                .map_err(|e| (e, "Erro ao salvar")),
            None => self
                .documents
                .create_document(&payload)
                .await
                .map_err(|e| (e, "Erro ao criar")),
        };

        let document = match saved {
            Ok(document) => document,
            Err((e, message)) => {
                tracing::warn!("Failed to save document: {}", e);
                self.saving = false;
                self.ui.notifier.show(message, 2500);
                return;
            }
        };

        if self.id.is_none() {
            self.id = document.id;
        }
        self.doc = Some(document);

        let Some(id) = self.id else {
            tracing::warn!("Saved document has no id; skipping content");
            self.saving = false;
            return;
        };

        if !self.content.is_worth_persisting() {
            self.saving = false;
            self.ui
                .notifier
                .show("Documento salvo. Defina o conteúdo depois.", 2000);
            self.ui.navigator.navigate(Route::Documents);
            return;
        }

        match self.documents.set_content(id, &self.content).await {
            Ok(_) => {
                self.ui.notifier.show("Conteúdo salvo!", 1600);
                self.saving = false;
                self.ui.navigator.navigate(Route::Documents);
            }
            Err(e) => {
                tracing::warn!("Failed to save content of document {}: {}", id, e);
                self.saving = false;
                self.ui.notifier.show("Falha ao salvar conteúdo", 2500);
            }
        }
    }

    /// Save current content, then submit to the signature provider. Drafts only.
    pub async fn send_now(&mut self) {
        let Some(id) = self.id else {
            self.ui.notifier.show("Salve o documento antes de enviar.", 2200);
            return;
        };
        if self.doc.as_ref().is_some_and(|doc| !doc.is_draft()) {
            self.ui.notifier.show("Documento já enviado.", 2000);
            return;
        }

        self.saving = true;
        let sent = match self.documents.set_content(id, &self.content).await {
            Ok(_) => {
                self.documents
                    .send_to_zapsign(id, &SendOverride::default())
                    .await
            }
            Err(e) => Err(e),
        };

        match sent {
            Ok(document) => {
                tracing::info!(document_id = id, status = ?document.status, "Sent to ZapSign");
                self.doc = Some(document);
                self.ui.notifier.show("Enviado para ZapSign!", 1800);
            }
            Err(e) => {
                tracing::warn!("Failed to send document {}: {}", id, e);
                self.ui.notifier.show("Falha ao enviar", 2500);
            }
        }
        self.saving = false;
    }

    /// Text sent for analysis: the selected content field, or the document name when it is blank
    pub fn analysis_text(&self) -> String {
        let selected = self.content.body().text();
        if selected.trim().is_empty() {
            self.form.name.clone()
        } else {
            selected.to_string()
        }
    }

    pub async fn analyze_now(&mut self) {
        let Some(id) = self.id else {
            self.ui.notifier.show("Salve o documento antes de analisar.", 2200);
            return;
        };

        let text = self.analysis_text();
        self.loading = true;
        match self.documents.analyze(id, &text).await {
            Ok(result) => {
                let dialog = AnalysisDialog::open(result);
                self.analysis = Some(dialog.clone());
                self.ui.dialogs.open_analysis(dialog);
            }
            Err(e) => {
                tracing::warn!("Failed to analyze document {}: {}", id, e);
                self.ui.notifier.show("Falha ao analisar", 2500);
            }
        }
        self.loading = false;
    }

    pub fn cancel(&self) {
        self.ui.navigator.navigate(Route::Documents);
    }
}
