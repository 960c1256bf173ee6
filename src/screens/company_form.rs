use crate::api::{Company, CompanyApi};
use crate::routes::Route;
use crate::ui::Ui;
use std::sync::Arc;

/// Editable fields of the company form. Both are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyFields {
    pub name: String,
    pub api_token: String,
}

impl CompanyFields {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.api_token.trim().is_empty()
    }

    fn patch(&mut self, company: &Company) {
        self.name = company.name.clone();
        self.api_token = company.api_token.clone();
    }

    fn to_payload(&self) -> Company {
        Company {
            name: self.name.clone(),
            api_token: self.api_token.clone(),
            ..Default::default()
        }
    }
}

/// Create/edit screen for one company
pub struct CompanyForm {
    api: Arc<dyn CompanyApi>,
    ui: Ui,
    pub id: Option<i64>,
    /// Last copy of the company seen from the backend
    pub company: Option<Company>,
    pub loading: bool,
    pub saving: bool,
    pub form: CompanyFields,
}

impl CompanyForm {
    pub fn new(api: Arc<dyn CompanyApi>, ui: Ui) -> Self {
        Self {
            api,
            ui,
            id: None,
            company: None,
            loading: false,
            saving: false,
            form: CompanyFields::default(),
        }
    }

    /// Enter the screen; with an id the form is pre-filled from the backend
    pub async fn activate(&mut self, id: Option<i64>) {
        self.id = id.filter(|id| *id > 0);
        let Some(id) = self.id else {
            return;
        };

        self.loading = true;
        match self.api.get(id).await {
            Ok(company) => {
                self.form.patch(&company);
                self.company = Some(company);
            }
            Err(e) => {
                tracing::warn!("Failed to load company {}: {}", id, e);
                self.ui.notifier.show("Falha ao carregar", 2000);
            }
        }
        self.loading = false;
    }

    pub async fn save(&mut self) {
        if !self.form.is_valid() {
            return;
        }
        self.saving = true;
        let payload = self.form.to_payload();

        match self.id {
            Some(id) => match self.api.update(id, &payload).await {
                Ok(_) => {
                    self.ui.notifier.show("Empresa atualizada", 1600);
                    self.finish();
                }
                Err(e) => {
                    tracing::warn!("Failed to update company {}: {}", id, e);
                    self.ui.notifier.show("Falha ao salvar", 2200);
                    self.saving = false;
                }
            },
            None => match self.api.create(&payload).await {
                Ok(created) => {
                    tracing::info!("Created company {:?}", created.id);
                    self.ui.notifier.show("Empresa criada", 1600);
                    self.finish();
                }
                Err(e) => {
                    tracing::warn!("Failed to create company: {}", e);
                    self.ui.notifier.show("Falha ao criar", 2200);
                    self.saving = false;
                }
            },
        }
    }

    pub fn cancel(&self) {
        self.ui.navigator.navigate(Route::Companies);
    }

    fn finish(&mut self) {
        self.saving = false;
        self.ui.navigator.navigate(Route::Companies);
    }
}
