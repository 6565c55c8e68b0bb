// tests/support/mocks/page_store.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use verso_core::domain::errors::{DomainError, DomainResult};
use verso_core::domain::page::{
    CategoryId, Component, ComponentId, ContentId, ContentMode, ContentVersion, Language, MetaTag,
    MetaTagId, NewContentVersion, NewPage, Page, PageId, PageStore, PageStoreTx, Revision,
    RevisionId, Url, UrlAlias,
};

#[derive(Default, Clone)]
struct StoreState {
    pages: HashMap<PageId, Page>,
    contents: HashMap<ContentId, ContentVersion>,
}

/// In-memory `PageStore` with real transaction semantics: a transaction
/// stages a full copy of the state and publishes it atomically on commit, so
/// a dropped transaction leaves nothing behind.
#[derive(Default, Clone)]
pub struct InMemoryPageStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct count over raw rows, for invariant assertions in tests.
    pub fn count_contents(&self, page_id: PageId, f: impl Fn(&ContentVersion) -> bool) -> usize {
        let state = self.state.lock().unwrap();
        state
            .contents
            .values()
            .filter(|c| c.page_id == page_id && f(c))
            .count()
    }
}

fn materialize(id: ContentId, new: NewContentVersion) -> ContentVersion {
    ContentVersion {
        id,
        page_id: new.page_id,
        language: new.language,
        title: new.title,
        body: new.body,
        url: new.url,
        url_alias: new.url_alias,
        mode: new.mode,
        workflow: new.workflow,
        published: new.published,
        expires_at: new.expires_at,
        meta_tag: new.meta_tag.map(|meta| MetaTag {
            id: MetaTagId::generate(),
            title: meta.title,
            description: meta.description,
            keywords: meta.keywords,
        }),
        components: new
            .components
            .into_iter()
            .map(|component| Component {
                id: ComponentId::generate(),
                kind: component.kind,
                payload: component.payload,
                position: component.position,
            })
            .collect(),
        category_ids: new.category_ids,
        revision: new.revision.map(|revision| Revision {
            id: RevisionId::generate(),
            content_id: id,
            author: revision.author,
            message: revision.message,
            description: revision.description,
            published: revision.published,
            created_at: new.created_at,
        }),
        created_at: new.created_at,
        updated_at: new.updated_at,
    }
}

#[async_trait]
impl PageStore for InMemoryPageStore {
    async fn find_page(&self, id: PageId) -> DomainResult<Option<Page>> {
        let state = self.state.lock().unwrap();
        Ok(state.pages.get(&id).cloned())
    }

    async fn find_content(&self, id: ContentId) -> DomainResult<Option<ContentVersion>> {
        let state = self.state.lock().unwrap();
        Ok(state.contents.get(&id).cloned())
    }

    async fn find_active_content(
        &self,
        page_id: PageId,
        language: Language,
    ) -> DomainResult<Option<ContentVersion>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contents
            .values()
            .find(|c| c.page_id == page_id && c.language == language && c.mode.is_active())
            .cloned())
    }

    async fn list_page_contents(
        &self,
        page_id: PageId,
        include_histories: bool,
    ) -> DomainResult<Vec<ContentVersion>> {
        let state = self.state.lock().unwrap();
        let mut contents: Vec<ContentVersion> = state
            .contents
            .values()
            .filter(|c| {
                c.page_id == page_id && (include_histories || c.mode != ContentMode::Histories)
            })
            .cloned()
            .collect();
        contents.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(contents)
    }

    async fn find_preview(
        &self,
        page_id: PageId,
        language: Language,
    ) -> DomainResult<Option<ContentVersion>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contents
            .values()
            .find(|c| {
                c.page_id == page_id && c.language == language && c.mode == ContentMode::Preview
            })
            .cloned())
    }

    async fn find_revision(&self, id: RevisionId) -> DomainResult<Option<Revision>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .contents
            .values()
            .filter_map(|c| c.revision.as_ref())
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_revisions(&self, page_id: PageId) -> DomainResult<Vec<Revision>> {
        let state = self.state.lock().unwrap();
        let mut revisions: Vec<Revision> = state
            .contents
            .values()
            .filter(|c| c.page_id == page_id)
            .filter_map(|c| c.revision.clone())
            .collect();
        revisions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(revisions)
    }

    async fn url_in_use(&self, url: &Url, exclude_page: Option<PageId>) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.contents.values().any(|c| {
            c.mode != ContentMode::Histories
                && c.url == *url
                && exclude_page.map_or(true, |page| c.page_id != page)
        }))
    }

    async fn alias_in_use(
        &self,
        alias: &UrlAlias,
        exclude_page: Option<PageId>,
    ) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.contents.values().any(|c| {
            c.mode != ContentMode::Histories
                && c.url_alias.as_ref() == Some(alias)
                && exclude_page.map_or(true, |page| c.page_id != page)
        }))
    }

    async fn begin(&self) -> DomainResult<Box<dyn PageStoreTx>> {
        let staged = self.state.lock().unwrap().clone();
        Ok(Box::new(InMemoryTx {
            shared: Arc::clone(&self.state),
            staged,
        }))
    }
}

struct InMemoryTx {
    shared: Arc<Mutex<StoreState>>,
    staged: StoreState,
}

#[async_trait]
impl PageStoreTx for InMemoryTx {
    async fn insert_page(&mut self, page: NewPage) -> DomainResult<Page> {
        let created = Page {
            id: PageId::generate(),
            kind: page.kind,
            created_at: page.created_at,
            updated_at: page.updated_at,
        };
        self.staged.pages.insert(created.id, created.clone());
        Ok(created)
    }

    async fn insert_content(
        &mut self,
        content: NewContentVersion,
    ) -> DomainResult<ContentVersion> {
        if !self.staged.pages.contains_key(&content.page_id) {
            return Err(DomainError::NotFound("page not found".into()));
        }
        let created = materialize(ContentId::generate(), content);
        self.staged.contents.insert(created.id, created.clone());
        Ok(created)
    }

    async fn archive_content(&mut self, id: ContentId) -> DomainResult<()> {
        let content = self
            .staged
            .contents
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("content version not found".into()))?;
        content.mode = ContentMode::Histories;
        Ok(())
    }

    async fn replace_preview(
        &mut self,
        id: ContentId,
        replacement: NewContentVersion,
    ) -> DomainResult<ContentVersion> {
        let existing = self
            .staged
            .contents
            .get(&id)
            .ok_or_else(|| DomainError::NotFound("preview row not found".into()))?;
        if existing.mode != ContentMode::Preview {
            return Err(DomainError::NotFound("preview row not found".into()));
        }
        let replaced = materialize(id, replacement);
        self.staged.contents.insert(id, replaced.clone());
        Ok(replaced)
    }

    async fn touch_page(&mut self, id: PageId, at: DateTime<Utc>) -> DomainResult<()> {
        let page = self
            .staged
            .pages
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        page.updated_at = at;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        *self.shared.lock().unwrap() = self.staged;
        Ok(())
    }
}
