//! Document generation
//!
//! Merges the root routes and every mounted group into one OpenAPI
//! document. Group paths are prefixed with the mount point and each of
//! their operations is tagged with the group tag.

use serde_json::{json, Value};
use utoipa::openapi::path::PathItem;
use utoipa::openapi::tag::Tag;
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

use super::{ApiMetadata, SchemaError};

/// A mounted route group as seen by the documentation
#[derive(Debug, Clone)]
pub struct DocumentedGroup {
    pub prefix: String,
    pub tag: String,
    pub api: OpenApi,
}

/// Every route known to the application at build time
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    root: OpenApi,
    groups: Vec<DocumentedGroup>,
}

impl RouteCatalog {
    /// Start a catalog from the routes mounted at the application root
    pub fn new(root: OpenApi) -> Self {
        Self {
            root,
            groups: Vec::new(),
        }
    }

    pub fn push(&mut self, group: DocumentedGroup) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[DocumentedGroup] {
        &self.groups
    }
}

/// Generate the schema document as JSON
pub fn generate(metadata: &ApiMetadata, catalog: &RouteCatalog) -> Result<Value, SchemaError> {
    let mut doc = OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(metadata.title.as_str())
                .version(metadata.version.as_str())
                .description(Some(metadata.description.as_str()))
                .build(),
        )
        .build();

    doc.merge(catalog.root.clone());

    for group in &catalog.groups {
        doc.merge(mount_group(group));
        add_tag(&mut doc, &group.tag);
    }

    let mut value = serde_json::to_value(&doc)?;
    value
        .get_mut("info")
        .and_then(Value::as_object_mut)
        .ok_or(SchemaError::MissingInfo)?
        .insert("x-logo".to_string(), json!({ "url": metadata.logo_url }));

    tracing::debug!(groups = catalog.groups.len(), "Generated OpenAPI document");

    Ok(value)
}

/// Rewrite a group's fragment as it appears under its mount point
fn mount_group(group: &DocumentedGroup) -> OpenApi {
    let mut api = group.api.clone();
    let paths = std::mem::take(&mut api.paths.paths);

    for (path, mut item) in paths {
        tag_operations(&mut item, &group.tag);
        api.paths.paths.insert(join_path(&group.prefix, &path), item);
    }

    api
}

fn tag_operations(item: &mut PathItem, tag: &str) {
    let operations = [
        &mut item.get,
        &mut item.put,
        &mut item.post,
        &mut item.delete,
        &mut item.options,
        &mut item.head,
        &mut item.patch,
        &mut item.trace,
    ];

    for operation in operations.into_iter().flatten() {
        let tags = operation.tags.get_or_insert_with(Vec::new);
        if !tags.iter().any(|t| t == tag) {
            tags.insert(0, tag.to_string());
        }
    }
}

fn add_tag(doc: &mut OpenApi, name: &str) {
    let tags = doc.tags.get_or_insert_with(Vec::new);
    if !tags.iter().any(|t| t.name == name) {
        tags.push(Tag::new(name));
    }
}

fn join_path(prefix: &str, path: &str) -> String {
    if path.is_empty() || path == "/" {
        return prefix.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", prefix, path)
    } else {
        format!("{}/{}", prefix, path)
    }
}
