//! Backend REST API clients.
//!
//! This module provides:
//! - Wire types mirroring the backend's companies, documents and content resources
//! - The `CompanyApi` and `DocumentApi` seams used by the screens
//! - reqwest-backed implementations of both against a configured base URL

pub mod types;
pub mod error;
pub mod http_client;
pub mod companies;
pub mod documents;

// Re-export commonly used types
pub use types::*;
pub use error::ClientError;
pub use http_client::ApiClient;
pub use companies::{CompanyApi, CompanyClient};
pub use documents::{DocumentApi, DocumentClient};
