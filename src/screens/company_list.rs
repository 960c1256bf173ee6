use super::pagination::Paginator;
use crate::api::{Company, CompanyApi};
use crate::routes::Route;
use crate::ui::{ClipboardError, Ui};
use std::sync::Arc;

pub const COMPANY_COLUMNS: [&str; 4] = ["id", "name", "api_token", "actions"];

/// Company table with copy-token, edit and delete row actions
pub struct CompanyList {
    api: Arc<dyn CompanyApi>,
    ui: Ui,
    pub rows: Vec<Company>,
    pub loading: bool,
    pub paginator: Paginator,
}

impl CompanyList {
    pub fn new(api: Arc<dyn CompanyApi>, ui: Ui) -> Self {
        Self {
            api,
            ui,
            rows: Vec::new(),
            loading: false,
            paginator: Paginator::default(),
        }
    }

    pub async fn activate(&mut self) {
        self.fetch().await;
    }

    pub async fn fetch(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(rows) => {
                self.rows = rows;
                self.paginator.clamp(self.rows.len());
            }
            Err(e) => {
                tracing::warn!("Failed to load companies: {}", e);
                self.rows.clear();
                self.ui.notifier.show("Falha ao carregar", 2000);
            }
        }
        self.loading = false;
    }

    /// Rows on the current page
    pub fn page(&self) -> &[Company] {
        self.paginator.slice(&self.rows)
    }

    pub fn copy(&self, token: &str) -> Result<(), ClipboardError> {
        match self.ui.clipboard.write_text(token) {
            Ok(()) => {
                self.ui.notifier.show("Copiado!", 1200);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to copy token: {}", e);
                self.ui.notifier.show("Falha ao copiar", 2000);
                Err(e)
            }
        }
    }

    pub fn new_company(&self) {
        self.ui.navigator.navigate(Route::CompanyNew);
    }

    pub fn edit(&self, company: &Company) {
        if let Some(id) = company.id {
            self.ui.navigator.navigate(Route::CompanyEdit(id));
        }
    }

    pub async fn remove(&mut self, company: &Company) {
        let Some(id) = company.id else {
            return;
        };
        if !self
            .ui
            .confirm
            .confirm(&format!("Excluir empresa \"{}\"?", company.name))
        {
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                self.ui.notifier.show("Excluída", 1500);
                self.fetch().await;
            }
            Err(e) => {
                tracing::warn!("Failed to delete company {}: {}", id, e);
                self.ui.notifier.show("Falha ao excluir", 2000);
            }
        }
    }
}
