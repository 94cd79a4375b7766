//! API server state

use std::sync::Arc;

use bytes::Bytes;

use crate::config::AppConfig;
use crate::error::Result;
use crate::openapi;

/// API server state
///
/// Immutable after startup; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    /// Prefix every route is mounted under; empty means root
    pub context_path: Arc<str>,

    /// Path of the API document relative to the context path
    pub api_doc_path: Arc<str>,

    /// OpenAPI document, rendered once
    pub api_doc: Bytes,
}

impl AppState {
    /// Build state from a normalized configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let document = openapi::document(config);
        let api_doc = serde_json::to_vec(&document)?;

        Ok(Self {
            context_path: Arc::from(config.server.context_path.as_str()),
            api_doc_path: Arc::from(config.api_doc.path.as_str()),
            api_doc: Bytes::from(api_doc),
        })
    }
}
