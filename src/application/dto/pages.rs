use crate::domain::page::{
    Component, ContentMode, ContentVersion, Language, MetaTag, Page, PageKind, Revision,
    WorkflowStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDto {
    pub id: Uuid,
    pub kind: PageKind,
    pub contents: Vec<ContentVersionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageDto {
    pub fn from_parts(page: Page, contents: Vec<ContentVersion>) -> Self {
        Self {
            id: page.id.into(),
            kind: page.kind,
            contents: contents.into_iter().map(Into::into).collect(),
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentVersionDto {
    pub id: Uuid,
    pub page_id: Uuid,
    pub language: Language,
    pub title: String,
    pub body: String,
    pub url: String,
    #[serde(default)]
    pub url_alias: Option<String>,
    pub mode: ContentMode,
    pub workflow_status: WorkflowStatus,
    pub published: bool,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub meta_tag: Option<MetaTagDto>,
    pub components: Vec<ComponentDto>,
    pub category_ids: Vec<Uuid>,
    #[serde(default)]
    pub revision: Option<RevisionDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentVersion> for ContentVersionDto {
    fn from(content: ContentVersion) -> Self {
        Self {
            id: content.id.into(),
            page_id: content.page_id.into(),
            language: content.language,
            title: content.title.into(),
            body: content.body,
            url: content.url.into(),
            url_alias: content.url_alias.map(Into::into),
            mode: content.mode,
            workflow_status: content.workflow,
            published: content.published,
            expires_at: content.expires_at,
            meta_tag: content.meta_tag.map(Into::into),
            components: content.components.into_iter().map(Into::into).collect(),
            category_ids: content.category_ids.into_iter().map(Into::into).collect(),
            revision: content.revision.map(Into::into),
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaTagDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl From<MetaTag> for MetaTagDto {
    fn from(meta: MetaTag) -> Self {
        Self {
            id: meta.id.into(),
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDto {
    pub id: Uuid,
    pub kind: String,
    pub payload: serde_json::Value,
    pub position: i32,
}

impl From<Component> for ComponentDto {
    fn from(component: Component) -> Self {
        Self {
            id: component.id.into(),
            kind: component.kind,
            payload: component.payload,
            position: component.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionDto {
    pub id: Uuid,
    pub content_id: Uuid,
    pub author: String,
    pub message: String,
    pub description: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Revision> for RevisionDto {
    fn from(revision: Revision) -> Self {
        Self {
            id: revision.id.into(),
            content_id: revision.content_id.into(),
            author: revision.author,
            message: revision.message,
            description: revision.description,
            published: revision.published,
            created_at: revision.created_at,
        }
    }
}

/// Result of a preview upsert: the stored working copy plus the url the
/// front-end loads it from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewDto {
    pub preview_url: String,
    pub content: ContentVersionDto,
}
