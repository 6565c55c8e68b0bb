use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{ContentVersion, NewContentVersion, NewPage, Page};
use crate::domain::page::revision::Revision;
use crate::domain::page::value_objects::{ContentId, Language, PageId, RevisionId, Url, UrlAlias};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable, transactional storage for pages and their content versions.
///
/// Reads run against committed state. Multi-step mutations go through a
/// [`PageStoreTx`]; contention between concurrent writers is resolved by the
/// backing store's transaction isolation, the engine holds no locks.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn find_page(&self, id: PageId) -> DomainResult<Option<Page>>;

    async fn find_content(&self, id: ContentId) -> DomainResult<Option<ContentVersion>>;

    /// The live (draft or published) version for a (page, language) slot.
    /// At most one such row exists at any time.
    async fn find_active_content(
        &self,
        page_id: PageId,
        language: Language,
    ) -> DomainResult<Option<ContentVersion>>;

    /// All versions of a page, optionally including archived history rows.
    async fn list_page_contents(
        &self,
        page_id: PageId,
        include_histories: bool,
    ) -> DomainResult<Vec<ContentVersion>>;

    /// The singleton preview row for a (page, language) slot, if present.
    async fn find_preview(
        &self,
        page_id: PageId,
        language: Language,
    ) -> DomainResult<Option<ContentVersion>>;

    async fn find_revision(&self, id: RevisionId) -> DomainResult<Option<Revision>>;

    /// Revisions of every version a page owns, newest first.
    async fn list_revisions(&self, page_id: PageId) -> DomainResult<Vec<Revision>>;

    /// Whether `url` is taken by any non-history version. Rows belonging to
    /// `exclude_page` do not count, so a page may keep its own url across an
    /// edit; `None` makes the check global.
    async fn url_in_use(&self, url: &Url, exclude_page: Option<PageId>) -> DomainResult<bool>;

    async fn alias_in_use(
        &self,
        alias: &UrlAlias,
        exclude_page: Option<PageId>,
    ) -> DomainResult<bool>;

    async fn begin(&self) -> DomainResult<Box<dyn PageStoreTx>>;
}

/// One atomic unit of work. Every write lands together on [`commit`]; a
/// dropped, uncommitted transaction leaves the store untouched.
///
/// [`commit`]: PageStoreTx::commit
#[async_trait]
pub trait PageStoreTx: Send {
    async fn insert_page(&mut self, page: NewPage) -> DomainResult<Page>;

    /// Persist a new content version, assigning fresh identities to the row
    /// and to every owned sub-resource (meta tag, components, revision).
    async fn insert_content(&mut self, content: NewContentVersion)
    -> DomainResult<ContentVersion>;

    /// Flip a row to `Histories`. Terminal for that row; the row itself is
    /// never deleted or edited afterwards.
    async fn archive_content(&mut self, id: ContentId) -> DomainResult<()>;

    /// Overwrite an existing preview row in place: same id, same page, every
    /// field and owned sub-resource replaced (not merged) by `replacement`.
    async fn replace_preview(
        &mut self,
        id: ContentId,
        replacement: NewContentVersion,
    ) -> DomainResult<ContentVersion>;

    async fn touch_page(&mut self, id: PageId, at: DateTime<Utc>) -> DomainResult<()>;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}
