// src/application/commands/pages/duplicate.rs
use super::service::{DUPLICATE_SUFFIX_LEN, PageLifecycleService};
use crate::{
    application::{
        commands::pages::input::RevisionInput,
        dto::{ContentVersionDto, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{
        ContentId, ContentMode, NewPage, NewRevision, PageId, Url, UrlAlias, WorkflowStatus,
    },
};
use uuid::Uuid;

/// Suffix draws per cloned url before giving up on finding a free one.
const DUPLICATE_SUFFIX_ATTEMPTS: usize = 3;

pub struct DuplicatePageCommand {
    pub page_id: Uuid,
}

pub struct DuplicateContentCommand {
    pub content_id: Uuid,
    pub revision: Option<RevisionInput>,
}

impl PageLifecycleService {
    /// Clone a page and every non-history version it owns into a brand-new
    /// page. Clones get fresh identities and a short random url suffix;
    /// each suffixed candidate is checked against the uniqueness guard and
    /// redrawn on a collision.
    pub async fn duplicate_page(&self, command: DuplicatePageCommand) -> ApplicationResult<PageDto> {
        let page_id = PageId::from(command.page_id);
        let page = self
            .store
            .find_page(page_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let sources = self.store.list_page_contents(page_id, false).await?;
        if sources.is_empty() {
            return Err(ApplicationError::NoNewContentToDuplicate);
        }

        // Resolve every clone url before opening the transaction. No page is
        // excluded: the clones belong to a page that does not exist yet, so
        // any hit is a genuine cross-page collision.
        let mut prepared = Vec::with_capacity(sources.len());
        for source in &sources {
            let url = self.suffixed_clone_url(&source.url).await?;
            let url_alias = match source.url_alias.as_ref() {
                Some(alias) => Some(self.suffixed_clone_alias(alias).await?),
                None => None,
            };
            prepared.push((source, url, url_alias));
        }

        let now = self.clock.now();

        let mut tx = self.store.begin().await?;
        let clone = tx
            .insert_page(NewPage {
                kind: page.kind,
                created_at: now,
                updated_at: now,
            })
            .await?;

        let mut contents = Vec::with_capacity(prepared.len());
        for (source, url, url_alias) in prepared {
            // Preview rows keep their empty revision; everything else gets a
            // fresh copy of its revision metadata.
            let revision = source.revision.as_ref().map(NewRevision::from);
            let mut version = source.to_new_version(clone.id, source.mode, revision, now);
            version.url = url;
            version.url_alias = url_alias;
            contents.push(tx.insert_content(version).await?);
        }
        tx.commit().await?;

        Ok(PageDto::from_parts(clone, contents))
    }

    async fn suffixed_clone_url(&self, url: &Url) -> ApplicationResult<Url> {
        for _ in 0..DUPLICATE_SUFFIX_ATTEMPTS {
            let candidate = url.with_suffix(&self.suffixes.suffix(DUPLICATE_SUFFIX_LEN));
            if !self.uniqueness.is_url_duplicate(&candidate, None).await? {
                return Ok(candidate);
            }
        }
        Err(ApplicationError::DuplicateUrl(url.as_str().to_string()))
    }

    async fn suffixed_clone_alias(&self, alias: &UrlAlias) -> ApplicationResult<UrlAlias> {
        for _ in 0..DUPLICATE_SUFFIX_ATTEMPTS {
            let candidate = alias.with_suffix(&self.suffixes.suffix(DUPLICATE_SUFFIX_LEN));
            if !self.uniqueness.is_alias_duplicate(&candidate, None).await? {
                return Ok(candidate);
            }
        }
        Err(ApplicationError::DuplicateUrlAlias(alias.as_str().to_string()))
    }

    /// Clone one content version into the other language of the two-language
    /// set, under the same page. The clone starts over as a draft with the
    /// supplied revision.
    pub async fn duplicate_content_to_language(
        &self,
        command: DuplicateContentCommand,
    ) -> ApplicationResult<ContentVersionDto> {
        let source = self
            .store
            .find_content(ContentId::from(command.content_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("content version not found"))?;

        if source.mode == ContentMode::Preview {
            return Err(ApplicationError::conflict(
                "a preview content version cannot be duplicated",
            ));
        }

        let revision_input = command.revision.ok_or(ApplicationError::NoRevisionFound)?;

        let target = source.language.counterpart();
        if self
            .store
            .find_active_content(source.page_id, target)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict(
                "target language already has an active content version",
            ));
        }

        let now = self.clock.now();
        let new_revision = NewRevision {
            author: revision_input.author,
            message: revision_input.message,
            description: revision_input.description,
            published: false,
        };

        let mut version =
            source.to_new_version(source.page_id, ContentMode::Draft, Some(new_revision), now);
        version.language = target;
        version.workflow = WorkflowStatus::Unpublished;
        version.published = false;

        let mut tx = self.store.begin().await?;
        let created = tx.insert_content(version).await?;
        tx.touch_page(source.page_id, now).await?;
        tx.commit().await?;

        Ok(created.into())
    }
}
