use crate::domain::page::value_objects::{ContentId, RevisionId};
use chrono::{DateTime, Utc};

/// Immutable audit marker attached 1:1 to a content version. Written once
/// when the version is created, never updated, removed only by page cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub id: RevisionId,
    pub content_id: ContentId,
    pub author: String,
    pub message: String,
    pub description: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Revision metadata for a version about to be persisted. Identity and the
/// content back-reference are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRevision {
    pub author: String,
    pub message: String,
    pub description: String,
    pub published: bool,
}

impl From<&Revision> for NewRevision {
    fn from(revision: &Revision) -> Self {
        Self {
            author: revision.author.clone(),
            message: revision.message.clone(),
            description: revision.description.clone(),
            published: revision.published,
        }
    }
}
