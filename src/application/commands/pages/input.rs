use crate::domain::page::{Language, WorkflowStatus};
use uuid::Uuid;

/// Caller-supplied content for create/update/preview/duplicate operations.
/// Free-form fields arrive as plain strings and are validated into value
/// objects during normalization.
#[derive(Debug, Clone)]
pub struct ContentInput {
    pub language: Language,
    pub title: String,
    pub body: String,
    /// Empty url means "derive one from the title".
    pub url: String,
    pub url_alias: Option<String>,
    pub workflow_status: WorkflowStatus,
    pub meta_tag: Option<MetaTagInput>,
    pub components: Vec<ComponentInput>,
    pub category_ids: Vec<Uuid>,
    pub revision: Option<RevisionInput>,
}

#[derive(Debug, Clone)]
pub struct MetaTagInput {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Debug, Clone)]
pub struct ComponentInput {
    pub kind: String,
    pub payload: serde_json::Value,
    pub position: i32,
}

#[derive(Debug, Clone)]
pub struct RevisionInput {
    pub author: String,
    pub message: String,
    pub description: String,
}
