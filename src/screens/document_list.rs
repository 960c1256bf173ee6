use super::pagination::Paginator;
use crate::api::{Document, DocumentApi, DocumentQuery, SendOverride, StatusReport};
use crate::routes::Route;
use crate::ui::Ui;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

pub const DOCUMENT_COLUMNS: [&str; 5] = ["id", "name", "status", "signers", "actions"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Status,
    CreatedAt,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "status" => Ok(SortField::Status),
            "created_at" => Ok(SortField::CreatedAt),
            other => Err(format!("cannot sort by {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub descending: bool,
}

fn compare(a: &Document, b: &Document, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Status => a.status.map(|s| s.as_str()).cmp(&b.status.map(|s| s.as_str())),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Document table with send, status, analyze and delete row actions
pub struct DocumentList {
    api: Arc<dyn DocumentApi>,
    ui: Ui,
    pub query: DocumentQuery,
    pub rows: Vec<Document>,
    pub loading: bool,
    pub paginator: Paginator,
    pub sort: Option<Sort>,
    /// Last report returned by the status action
    pub last_status: Option<StatusReport>,
}

impl DocumentList {
    pub fn new(api: Arc<dyn DocumentApi>, ui: Ui) -> Self {
        Self {
            api,
            ui,
            query: DocumentQuery::default(),
            rows: Vec::new(),
            loading: false,
            paginator: Paginator::default(),
            sort: None,
            last_status: None,
        }
    }

    pub async fn activate(&mut self) {
        self.fetch().await;
    }

    /// Load failures are not shown to the user
    pub async fn fetch(&mut self) {
        self.loading = true;
        match self.api.list_documents(&self.query).await {
            Ok(rows) => {
                self.rows = rows;
                self.paginator.clamp(self.rows.len());
            }
            Err(e) => {
                tracing::warn!("Failed to load documents: {}", e);
                self.rows.clear();
            }
        }
        self.loading = false;
    }

    /// Current page after sorting
    pub fn page(&self) -> Vec<&Document> {
        let mut sorted: Vec<&Document> = self.rows.iter().collect();
        if let Some(sort) = self.sort {
            sorted.sort_by(|a, b| {
                let ordering = compare(a, b, sort.field);
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        self.paginator.slice(&sorted).to_vec()
    }

    pub fn new_document(&self) {
        self.ui.navigator.navigate(Route::DocumentNew);
    }

    pub fn edit(&self, document: &Document) {
        if let Some(id) = document.id {
            self.ui.navigator.navigate(Route::DocumentEdit(id));
        }
    }

    /// Submit for signature, then refresh the table
    pub async fn send(&mut self, document: &Document) {
        let Some(id) = document.id else {
            return;
        };
        match self.api.send_to_zapsign(id, &SendOverride::default()).await {
            Ok(_) => self.fetch().await,
            Err(e) => tracing::warn!("Failed to send document {}: {}", id, e),
        }
    }

    /// Ask the backend to poll the provider, then refresh the table
    pub async fn status(&mut self, document: &Document) {
        let Some(id) = document.id else {
            return;
        };
        match self.api.get_status(id).await {
            Ok(report) => {
                tracing::info!(document_id = report.document_id, status = ?report.status, "Status refreshed");
                self.last_status = Some(report);
                self.fetch().await;
            }
            Err(e) => tracing::warn!("Failed to query status of document {}: {}", id, e),
        }
    }

    /// Analyze by document name; the result is only logged
    pub async fn analyze(&self, document: &Document) {
        let Some(id) = document.id else {
            return;
        };
        match self.api.analyze(id, &document.name).await {
            Ok(result) => tracing::info!(document_id = id, %result, "Analysis result"),
            Err(e) => tracing::warn!("Failed to analyze document {}: {}", id, e),
        }
    }

    pub async fn remove(&mut self, document: &Document) {
        let Some(id) = document.id else {
            return;
        };
        if !self
            .ui
            .confirm
            .confirm(&format!("Excluir documento \"{}\"?", document.name))
        {
            return;
        }

        match self.api.delete_document(id).await {
            Ok(()) => {
                self.ui.notifier.show("Excluída", 1500);
                self.fetch().await;
            }
            Err(e) => {
                tracing::warn!("Failed to delete document {}: {}", id, e);
                self.ui.notifier.show("Falha ao excluir", 2000);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DocumentStatus;
    use crate::testing::{FakeDocumentApi, TestHost};

    fn doc(id: i64, name: &str, status: DocumentStatus) -> Document {
        Document {
            id: Some(id),
            company: 1,
            name: name.to_string(),
            status: Some(status),
            ..Default::default()
        }
    }

    fn screen(api: &Arc<FakeDocumentApi>, host: &TestHost) -> DocumentList {
        DocumentList::new(api.clone(), host.ui())
    }

    #[tokio::test]
    async fn test_fetch_failure_is_silent() {
        let api = Arc::new(FakeDocumentApi::with(vec![doc(1, "A", DocumentStatus::Draft)]));
        api.fail("list_documents");
        let host = TestHost::default();
        let mut list = screen(&api, &host);

        list.activate().await;

        assert!(list.rows.is_empty());
        assert!(!list.loading);
        assert!(host.messages().is_empty());
    }

    #[tokio::test]
    async fn test_send_refetches() {
        let api = Arc::new(FakeDocumentApi::with(vec![doc(1, "A", DocumentStatus::Draft)]));
        let host = TestHost::default();
        let mut list = screen(&api, &host);

        list.send(&doc(1, "A", DocumentStatus::Draft)).await;

        assert_eq!(api.calls(), vec!["send_to_zapsign(1)", "list_documents"]);
    }

    #[tokio::test]
    async fn test_refetch_failure_after_status_is_swallowed() {
        let api = Arc::new(FakeDocumentApi::with(vec![doc(1, "A", DocumentStatus::Sent)]));
        api.fail("list_documents");
        let host = TestHost::default();
        let mut list = screen(&api, &host);

        list.status(&doc(1, "A", DocumentStatus::Sent)).await;

        assert_eq!(api.calls(), vec!["get_status(1)", "list_documents"]);
        assert!(host.messages().is_empty());
        assert!(!list.loading);
        assert_eq!(list.last_status.as_ref().map(|r| r.document_id), Some(1));
    }

    #[tokio::test]
    async fn test_status_failure_skips_refetch() {
        let api = Arc::new(FakeDocumentApi::with(vec![doc(1, "A", DocumentStatus::Sent)]));
        api.fail("get_status");
        let host = TestHost::default();
        let mut list = screen(&api, &host);

        list.status(&doc(1, "A", DocumentStatus::Sent)).await;

        assert_eq!(api.calls(), vec!["get_status(1)"]);
        assert!(list.last_status.is_none());
    }

    #[tokio::test]
    async fn test_analyze_uses_document_name() {
        let api = Arc::new(FakeDocumentApi::default());
        let host = TestHost::default();
        let list = screen(&api, &host);

        list.analyze(&doc(3, "Contrato X", DocumentStatus::Draft)).await;

        assert_eq!(api.analyzed.lock().unwrap().as_slice(), &[(3, "Contrato X".to_string())]);
        assert!(host.dialogs.opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_requires_confirmation() {
        let api = Arc::new(FakeDocumentApi::with(vec![doc(1, "A", DocumentStatus::Draft)]));
        let host = TestHost::default();
        *host.confirm.answer.lock().unwrap() = false;
        let mut list = screen(&api, &host);

        list.remove(&doc(1, "A", DocumentStatus::Draft)).await;
        assert!(api.calls().is_empty());
        assert!(host.messages().is_empty());

        *host.confirm.answer.lock().unwrap() = true;
        list.remove(&doc(1, "A", DocumentStatus::Draft)).await;
        assert_eq!(api.calls(), vec!["delete_document(1)", "list_documents"]);
        assert_eq!(host.messages(), vec!["Excluída"]);
    }

    #[tokio::test]
    async fn test_sorted_page() {
        let api = Arc::new(FakeDocumentApi::with(vec![
            doc(1, "beta", DocumentStatus::Sent),
            doc(2, "Alpha", DocumentStatus::Draft),
            doc(3, "gamma", DocumentStatus::Signed),
        ]));
        let host = TestHost::default();
        let mut list = screen(&api, &host);
        list.activate().await;

        list.sort = Some(Sort { field: SortField::Name, descending: false });
        let names: Vec<_> = list.page().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);

        list.sort = Some(Sort { field: SortField::Id, descending: true });
        let ids: Vec<_> = list.page().iter().filter_map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("created_at".parse::<SortField>(), Ok(SortField::CreatedAt));
        assert!("signers".parse::<SortField>().is_err());
    }
}
