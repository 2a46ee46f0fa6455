//! Shared application state

use std::sync::Arc;

use crate::openapi::SchemaService;

/// State shared by the root handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub schema: Arc<SchemaService>,
}

impl AppState {
    pub fn new(schema: SchemaService) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }
}
