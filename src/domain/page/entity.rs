// src/domain/page/entity.rs
use crate::domain::page::component::{Component, MetaTag, NewComponent, NewMetaTag};
use crate::domain::page::revision::{NewRevision, Revision};
use crate::domain::page::value_objects::{
    CategoryId, ContentId, ContentMode, Language, PageId, PageKind, Title, Url, UrlAlias,
    WorkflowStatus,
};
use chrono::{DateTime, Utc};

/// Stable aggregate root. The id a url ultimately resolves to never changes;
/// edits only supersede the owned content versions.
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub kind: PageKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub kind: PageKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One language-specific, versioned unit of page content together with its
/// owned sub-resources.
#[derive(Debug, Clone)]
pub struct ContentVersion {
    pub id: ContentId,
    pub page_id: PageId,
    pub language: Language,
    pub title: Title,
    pub body: String,
    pub url: Url,
    pub url_alias: Option<UrlAlias>,
    pub mode: ContentMode,
    pub workflow: WorkflowStatus,
    pub published: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub meta_tag: Option<MetaTag>,
    pub components: Vec<Component>,
    pub category_ids: Vec<CategoryId>,
    pub revision: Option<Revision>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentVersion {
    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    /// Rebuild this version's content fields as a brand-new insert, with
    /// every identity (version, meta tag, components, revision) discarded.
    /// Supersede, revert and both duplicate operations all create rows this
    /// way; nothing is ever re-persisted under an old id.
    pub fn to_new_version(
        &self,
        page_id: PageId,
        mode: ContentMode,
        revision: Option<NewRevision>,
        now: DateTime<Utc>,
    ) -> NewContentVersion {
        NewContentVersion {
            page_id,
            language: self.language,
            title: self.title.clone(),
            body: self.body.clone(),
            url: self.url.clone(),
            url_alias: self.url_alias.clone(),
            mode,
            workflow: self.workflow,
            published: self.published,
            expires_at: self.expires_at,
            meta_tag: self.meta_tag.as_ref().map(NewMetaTag::from),
            components: self.components.iter().map(NewComponent::from).collect(),
            category_ids: self.category_ids.clone(),
            revision,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A content version ready to be persisted. Carries no identities; the store
/// assigns fresh ids to the row and all owned sub-resources on insert.
#[derive(Debug, Clone)]
pub struct NewContentVersion {
    pub page_id: PageId,
    pub language: Language,
    pub title: Title,
    pub body: String,
    pub url: Url,
    pub url_alias: Option<UrlAlias>,
    pub mode: ContentMode,
    pub workflow: WorkflowStatus,
    pub published: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub meta_tag: Option<NewMetaTag>,
    pub components: Vec<NewComponent>,
    pub category_ids: Vec<CategoryId>,
    pub revision: Option<NewRevision>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
