//! OpenAPI module
//!
//! Builds the API description from the registered routes and serves it
//! from a compute-once cache.

mod cache;
mod document;

pub use cache::{CachedSchema, SchemaCache};
pub use document::{generate, DocumentedGroup, RouteCatalog};

/// Logo shown by documentation UIs that understand the `x-logo` extension
pub const LOGO_URL: &str = "https://fastapi.tiangolo.com/img/logo-margin/logo-teal.png";

/// Fixed metadata placed in the document's `info` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMetadata {
    pub title: String,
    pub version: String,
    pub description: String,
    pub logo_url: String,
}

impl Default for ApiMetadata {
    fn default() -> Self {
        Self {
            title: "Custom title".to_string(),
            version: "2.5.0".to_string(),
            description: "This is a very custom OpenAPI schema".to_string(),
            logo_url: LOGO_URL.to_string(),
        }
    }
}

/// Schema generation error types
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Failed to serialize OpenAPI document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Generated OpenAPI document has no info object")]
    MissingInfo,
}

/// Route metadata plus the cache holding the rendered document
#[derive(Debug)]
pub struct SchemaService {
    metadata: ApiMetadata,
    catalog: RouteCatalog,
    cache: SchemaCache,
}

impl SchemaService {
    pub fn new(metadata: ApiMetadata, catalog: RouteCatalog) -> Self {
        Self {
            metadata,
            catalog,
            cache: SchemaCache::new(),
        }
    }

    /// Return the cached document, generating it on first use
    pub async fn document(&self) -> Result<&CachedSchema, SchemaError> {
        self.cache
            .get_or_generate(|| generate(&self.metadata, &self.catalog))
            .await
    }

    /// Whether the document has been generated yet
    pub fn is_generated(&self) -> bool {
        self.cache.get().is_some()
    }

    pub fn metadata(&self) -> &ApiMetadata {
        &self.metadata
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }
}
