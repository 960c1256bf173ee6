//! Terminal front end over the screen commands

use crate::api::{DocumentContent, DocumentQuery, DocumentStatus};
use crate::commands::{self, AppState, CompanyInput, DocumentInput};
use crate::config::AppConfig;
use crate::routes::Route;
use crate::screens::{Paginator, SignerFields, Sort, SortField, DEFAULT_PAGE_SIZE};
use crate::ui::terminal::{TerminalConfirm, TerminalDialogs, TerminalNavigator, TerminalNotifier};
use crate::ui::{SystemClipboard, Ui};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Manage companies and e-signature documents on the ZapFlow backend
#[derive(Parser)]
#[command(name = "zapflow", author, version, about, long_about = None)]
pub struct Cli {
    /// Backend REST root, e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    pub api_base: Option<String>,
    /// Config file. Defaults to the platform config dir (zapflow/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Company screens
    #[command(subcommand)]
    Companies(CompanyCommand),
    /// Document screens
    #[command(subcommand)]
    Documents(DocumentCommand),
}

#[derive(Args, Clone, Copy)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl PageArgs {
    fn paginator(&self) -> Paginator {
        Paginator {
            page_index: self.page.saturating_sub(1),
            page_size: self.page_size.max(1),
        }
    }
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        api_token: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        api_token: Option<String>,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Copy the company's api_token to the clipboard
    CopyToken {
        id: i64,
    },
}

#[derive(Args, Clone)]
pub struct DocumentArgs {
    #[arg(long)]
    pub company: Option<i64>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub created_by: Option<String>,
    #[arg(long)]
    pub external_id: Option<String>,
    /// Signer as "Name <email>"; repeat for several. Replaces the current signers.
    #[arg(long = "signer", value_parser = parse_signer)]
    pub signers: Vec<SignerFields>,
    /// Markdown body of the contract
    #[arg(long, conflicts_with = "pdf_url")]
    pub markdown: Option<String>,
    /// URL of the contract PDF
    #[arg(long)]
    pub pdf_url: Option<String>,
}

impl DocumentArgs {
    fn into_input(self) -> DocumentInput {
        let content = match (self.markdown, self.pdf_url) {
            (Some(markdown), _) => Some(DocumentContent::markdown(markdown)),
            (None, Some(url)) => Some(DocumentContent::pdf_url(url)),
            (None, None) => None,
        };
        DocumentInput {
            company: self.company,
            name: self.name,
            created_by: self.created_by,
            external_id: self.external_id,
            signers: (!self.signers.is_empty()).then_some(self.signers),
            content,
        }
    }
}

#[derive(Subcommand)]
pub enum DocumentCommand {
    List {
        #[arg(long)]
        company: Option<i64>,
        #[arg(long)]
        status: Option<DocumentStatus>,
        /// id, name, status or created_at
        #[arg(long)]
        sort: Option<SortField>,
        #[arg(long, requires = "sort")]
        desc: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    Show {
        id: i64,
    },
    Create {
        #[command(flatten)]
        fields: DocumentArgs,
    },
    Edit {
        id: i64,
        #[command(flatten)]
        fields: DocumentArgs,
    },
    Delete {
        id: i64,
        #[arg(long, short)]
        yes: bool,
    },
    /// Save the current content and submit to the signature provider
    Send {
        id: i64,
    },
    /// Poll the signature status
    Status {
        id: i64,
    },
    /// Analyze the document content
    Analyze {
        id: i64,
    },
}

/// Parse `Name <email>`
pub fn parse_signer(raw: &str) -> Result<SignerFields, String> {
    let raw = raw.trim();
    let (name, rest) = raw
        .split_once('<')
        .ok_or_else(|| format!("expected \"Name <email>\", got \"{}\"", raw))?;
    let email = rest
        .strip_suffix('>')
        .ok_or_else(|| format!("missing closing '>' in \"{}\"", raw))?;
    let signer = SignerFields::new(name.trim(), email.trim());
    if !signer.is_valid() {
        return Err(format!("signer needs a name and an email: \"{}\"", raw));
    }
    Ok(signer)
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn footer(paginator: &Paginator, total: usize) {
    println!(
        "page {}/{} ({} rows)",
        paginator.page_index + 1,
        paginator.page_count(total).max(1),
        total
    );
}

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), cli.api_base)?;

    let assume_yes = matches!(
        cli.command,
        Command::Companies(CompanyCommand::Delete { yes: true, .. })
            | Command::Documents(DocumentCommand::Delete { yes: true, .. })
    );
    let navigator = Arc::new(TerminalNavigator::default());
    let ui = Ui {
        notifier: Arc::new(TerminalNotifier),
        confirm: Arc::new(TerminalConfirm { assume_yes }),
        clipboard: Arc::new(SystemClipboard),
        navigator: navigator.clone(),
        dialogs: Arc::new(TerminalDialogs),
    };
    let state = AppState::from_config(&config, ui)?;

    match cli.command {
        Command::Companies(command) => companies(&state, &navigator, command).await,
        Command::Documents(command) => documents(&state, &navigator, command).await,
    }
}

/// A form flow succeeded when it navigated back to its list
fn ensure_returned(navigator: &TerminalNavigator, list: Route) -> anyhow::Result<()> {
    if navigator.last_route() == Some(list) {
        Ok(())
    } else {
        anyhow::bail!("operation did not complete")
    }
}

async fn companies(state: &AppState, navigator: &TerminalNavigator, command: CompanyCommand) -> anyhow::Result<()> {
    match command {
        CompanyCommand::List { page } => {
            let list = commands::list_companies(state, page.paginator()).await;
            println!("{:>6}  {:<32}  {}", "id", "name", "api_token");
            for company in list.page() {
                println!(
                    "{:>6}  {:<32}  {}",
                    company.id.map(|id| id.to_string()).unwrap_or_default(),
                    truncate(&company.name, 32),
                    company.api_token
                );
            }
            footer(&list.paginator, list.rows.len());
        }
        CompanyCommand::Show { id } => {
            let form = commands::show_company(state, id).await?;
            println!("id:        {}", id);
            println!("name:      {}", form.form.name);
            println!("api_token: {}", form.form.api_token);
        }
        CompanyCommand::Create { name, api_token } => {
            let input = CompanyInput {
                name: Some(name),
                api_token: Some(api_token),
            };
            commands::save_company(state, None, input).await?;
            ensure_returned(navigator, Route::Companies)?;
        }
        CompanyCommand::Edit { id, name, api_token } => {
            commands::save_company(state, Some(id), CompanyInput { name, api_token }).await?;
            ensure_returned(navigator, Route::Companies)?;
        }
        CompanyCommand::Delete { id, .. } => {
            commands::delete_company(state, id).await?;
        }
        CompanyCommand::CopyToken { id } => {
            commands::copy_company_token(state, id).await?;
        }
    }
    Ok(())
}

async fn documents(state: &AppState, navigator: &TerminalNavigator, command: DocumentCommand) -> anyhow::Result<()> {
    match command {
        DocumentCommand::List {
            company,
            status,
            sort,
            desc,
            page,
        } => {
            let query = DocumentQuery { company, status };
            let sort = sort.map(|field| Sort {
                field,
                descending: desc,
            });
            let list = commands::list_documents(state, query, sort, page.paginator()).await;
            println!("{:>6}  {:<32}  {:<9}  {}", "id", "name", "status", "signers");
            for document in list.page() {
                let signers: Vec<&str> = document.signers.iter().map(|s| s.name.as_str()).collect();
                println!(
                    "{:>6}  {:<32}  {:<9}  {}",
                    document.id.map(|id| id.to_string()).unwrap_or_default(),
                    truncate(&document.name, 32),
                    document.status.map(|s| s.to_string()).unwrap_or_default(),
                    signers.join(", ")
                );
            }
            footer(&list.paginator, list.rows.len());
        }
        DocumentCommand::Show { id } => {
            let form = commands::show_document(state, id).await?;
            let Some(doc) = form.doc.as_ref() else {
                anyhow::bail!("document {} could not be loaded", id);
            };
            println!("id:       {}", id);
            println!("name:     {}", doc.name);
            println!("company:  {}", doc.company);
            println!("status:   {}", doc.status.map(|s| s.to_string()).unwrap_or_default());
            for signer in &doc.signers {
                println!("signer:   {} <{}>", signer.name, signer.email);
            }
            match form.content.body() {
                crate::api::ContentBody::Markdown(text) => println!("markdown:\n{}", text),
                crate::api::ContentBody::PdfUrl(url) => println!("pdf_url:  {}", url),
            }
        }
        DocumentCommand::Create { fields } => {
            commands::save_document(state, None, fields.into_input()).await?;
            ensure_returned(navigator, Route::Documents)?;
        }
        DocumentCommand::Edit { id, fields } => {
            commands::save_document(state, Some(id), fields.into_input()).await?;
            ensure_returned(navigator, Route::Documents)?;
        }
        DocumentCommand::Delete { id, .. } => {
            commands::delete_document(state, id).await?;
        }
        DocumentCommand::Send { id } => {
            let form = commands::send_document(state, id).await?;
            if let Some(doc) = form.doc {
                println!("status: {}", doc.status.map(|s| s.to_string()).unwrap_or_default());
            }
        }
        DocumentCommand::Status { id } => {
            let list = commands::refresh_status(state, id).await?;
            if let Some(report) = &list.last_status {
                println!("status: {}", report.status.map(|s| s.to_string()).unwrap_or_default());
            }
        }
        DocumentCommand::Analyze { id } => {
            commands::analyze_document(state, id).await?;
        }
    }
    Ok(())
}
