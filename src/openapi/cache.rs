//! Compute-once schema cache

use axum::body::Bytes;
use serde_json::Value;
use tokio::sync::OnceCell;

use super::SchemaError;

/// A generated document together with its serialized body
#[derive(Debug, Clone)]
pub struct CachedSchema {
    document: Value,
    body: Bytes,
}

impl CachedSchema {
    fn render(document: Value) -> Result<Self, SchemaError> {
        let body = Bytes::from(serde_json::to_vec(&document)?);
        Ok(Self { document, body })
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Serialized JSON, identical for every caller
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Holds the schema once it has been generated.
///
/// Concurrent first callers wait on a single generation. A failed
/// generation leaves the cache empty so the next caller retries.
#[derive(Debug, Default)]
pub struct SchemaCache {
    cell: OnceCell<CachedSchema>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&CachedSchema> {
        self.cell.get()
    }

    pub async fn get_or_generate<F>(&self, generate: F) -> Result<&CachedSchema, SchemaError>
    where
        F: FnOnce() -> Result<Value, SchemaError>,
    {
        self.cell
            .get_or_try_init(|| async move {
                let cached = CachedSchema::render(generate()?)?;
                tracing::info!(bytes = cached.body.len(), "OpenAPI schema cached");
                Ok(cached)
            })
            .await
    }
}
