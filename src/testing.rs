//! Recording fakes for the API and host seams, shared by the screen tests.

use crate::api::{
    ClientError, Company, CompanyApi, Document, DocumentApi, DocumentContent, DocumentQuery, SendOverride,
    StatusReport,
};
use crate::routes::Route;
use crate::screens::AnalysisDialog;
use crate::ui::{Clipboard, ClipboardError, ConfirmDialog, DialogService, Navigator, Notification, Notifier, Ui};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub fn failure() -> ClientError {
    ClientError::Status {
        status_code: 500,
        message: "boom".to_string(),
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn open(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

pub struct FixedConfirm {
    pub answer: Mutex<bool>,
    pub prompts: Mutex<Vec<String>>,
}

impl Default for FixedConfirm {
    fn default() -> Self {
        Self {
            answer: Mutex::new(true),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

impl ConfirmDialog for FixedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        *self.answer.lock().unwrap()
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub texts: Mutex<Vec<String>>,
    pub fail: Mutex<bool>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if *self.fail.lock().unwrap() {
            return Err(ClipboardError::Unavailable("test".to_string()));
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Default)]
pub struct RecordingDialogs {
    pub opened: Mutex<Vec<AnalysisDialog>>,
}

impl DialogService for RecordingDialogs {
    fn open_analysis(&self, dialog: AnalysisDialog) {
        self.opened.lock().unwrap().push(dialog);
    }
}

/// Host fakes plus the `Ui` bundle built from them
#[derive(Default)]
pub struct TestHost {
    pub notifier: Arc<RecordingNotifier>,
    pub confirm: Arc<FixedConfirm>,
    pub clipboard: Arc<RecordingClipboard>,
    pub navigator: Arc<RecordingNavigator>,
    pub dialogs: Arc<RecordingDialogs>,
}

impl TestHost {
    pub fn ui(&self) -> Ui {
        Ui {
            notifier: self.notifier.clone(),
            confirm: self.confirm.clone(),
            clipboard: self.clipboard.clone(),
            navigator: self.navigator.clone(),
            dialogs: self.dialogs.clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifier.messages()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.navigator.routes.lock().unwrap().clone()
    }
}

pub fn company(id: i64, name: &str) -> Company {
    Company {
        id: Some(id),
        name: name.to_string(),
        api_token: format!("tok-{}", id),
        ..Default::default()
    }
}

/// In-memory `CompanyApi`. Operations named in `failing` return an error.
#[derive(Default)]
pub struct FakeCompanyApi {
    pub companies: Mutex<Vec<Company>>,
    pub failing: Mutex<HashSet<&'static str>>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<Company>>,
    pub updated: Mutex<Vec<(i64, Company)>>,
}

impl FakeCompanyApi {
    pub fn with(companies: Vec<Company>) -> Self {
        let api = Self::default();
        *api.companies.lock().unwrap() = companies;
        api
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(op) {
            return Err(failure());
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyApi for FakeCompanyApi {
    async fn list(&self) -> Result<Vec<Company>, ClientError> {
        self.record("list", "list".to_string())?;
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Company, ClientError> {
        self.record("get", format!("get({})", id))?;
        self.companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == Some(id))
            .cloned()
            .ok_or(ClientError::Status {
                status_code: 404,
                message: "not found".to_string(),
            })
    }

    async fn create(&self, payload: &Company) -> Result<Company, ClientError> {
        self.record("create", "create".to_string())?;
        self.created.lock().unwrap().push(payload.clone());
        let mut created = payload.clone();
        created.id = Some(100);
        Ok(created)
    }

    async fn update(&self, id: i64, payload: &Company) -> Result<Company, ClientError> {
        self.record("update", format!("update({})", id))?;
        self.updated.lock().unwrap().push((id, payload.clone()));
        let mut updated = payload.clone();
        updated.id = Some(id);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.record("delete", format!("delete({})", id))?;
        self.companies.lock().unwrap().retain(|c| c.id != Some(id));
        Ok(())
    }
}

/// In-memory `DocumentApi` with canned responses
pub struct FakeDocumentApi {
    pub documents: Mutex<Vec<Document>>,
    pub content: Mutex<Option<DocumentContent>>,
    pub sent: Mutex<Option<Document>>,
    pub analysis: Mutex<Value>,
    pub failing: Mutex<HashSet<&'static str>>,
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<Document>>,
    pub contents_set: Mutex<Vec<(i64, DocumentContent)>>,
    pub analyzed: Mutex<Vec<(i64, String)>>,
}

impl Default for FakeDocumentApi {
    fn default() -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            content: Mutex::new(None),
            sent: Mutex::new(None),
            analysis: Mutex::new(json!({"score": 0.9})),
            failing: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
            payloads: Mutex::new(Vec::new()),
            contents_set: Mutex::new(Vec::new()),
            analyzed: Mutex::new(Vec::new()),
        }
    }
}

impl FakeDocumentApi {
    pub fn with(documents: Vec<Document>) -> Self {
        let api = Self::default();
        *api.documents.lock().unwrap() = documents;
        api
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(op) {
            return Err(failure());
        }
        Ok(())
    }

    fn find(&self, id: i64) -> Result<Document, ClientError> {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == Some(id))
            .cloned()
            .ok_or(ClientError::Status {
                status_code: 404,
                message: "not found".to_string(),
            })
    }
}

#[async_trait]
impl DocumentApi for FakeDocumentApi {
    async fn list_documents(&self, _query: &DocumentQuery) -> Result<Vec<Document>, ClientError> {
        self.record("list_documents", "list_documents".to_string())?;
        Ok(self.documents.lock().unwrap().clone())
    }

    async fn get_document(&self, id: i64) -> Result<Document, ClientError> {
        self.record("get_document", format!("get_document({})", id))?;
        self.find(id)
    }

    async fn create_document(&self, payload: &Document) -> Result<Document, ClientError> {
        self.record("create_document", "create_document".to_string())?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut created = payload.clone();
        created.id = Some(200);
        created.status = Some(crate::api::DocumentStatus::Draft);
        Ok(created)
    }

    async fn update_document(&self, id: i64, payload: &Document) -> Result<Document, ClientError> {
        self.record("update_document", format!("update_document({})", id))?;
        self.payloads.lock().unwrap().push(payload.clone());
        let mut updated = payload.clone();
        updated.id = Some(id);
        updated.status = Some(crate::api::DocumentStatus::Draft);
        Ok(updated)
    }

    async fn delete_document(&self, id: i64) -> Result<(), ClientError> {
        self.record("delete_document", format!("delete_document({})", id))?;
        self.documents.lock().unwrap().retain(|d| d.id != Some(id));
        Ok(())
    }

    async fn get_content(&self, id: i64) -> Result<DocumentContent, ClientError> {
        self.record("get_content", format!("get_content({})", id))?;
        self.content.lock().unwrap().clone().ok_or(ClientError::Status {
            status_code: 404,
            message: "Sem conteúdo definido.".to_string(),
        })
    }

    async fn set_content(&self, id: i64, content: &DocumentContent) -> Result<DocumentContent, ClientError> {
        self.record("set_content", format!("set_content({})", id))?;
        self.contents_set.lock().unwrap().push((id, content.clone()));
        Ok(content.clone())
    }

    async fn send_to_zapsign(&self, id: i64, _body: &SendOverride) -> Result<Document, ClientError> {
        self.record("send_to_zapsign", format!("send_to_zapsign({})", id))?;
        match self.sent.lock().unwrap().clone() {
            Some(doc) => Ok(doc),
            None => {
                let mut doc = self.find(id)?;
                doc.status = Some(crate::api::DocumentStatus::Sent);
                Ok(doc)
            }
        }
    }

    async fn get_status(&self, id: i64) -> Result<StatusReport, ClientError> {
        self.record("get_status", format!("get_status({})", id))?;
        Ok(StatusReport {
            document_id: id,
            status: Some(crate::api::DocumentStatus::Sent),
            raw: json!({}),
        })
    }

    async fn analyze(&self, id: i64, text: &str) -> Result<Value, ClientError> {
        self.record("analyze", format!("analyze({})", id))?;
        self.analyzed.lock().unwrap().push((id, text.to_string()));
        Ok(self.analysis.lock().unwrap().clone())
    }
}
