// src/application/commands/pages/preview.rs
use super::service::PageLifecycleService;
use crate::{
    application::{
        commands::pages::input::ContentInput,
        dto::PreviewDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{ContentMode, PageId, WorkflowStatus},
};
use chrono::Duration;
use uuid::Uuid;

/// How long a preview working copy stays addressable.
const PREVIEW_TTL_HOURS: i64 = 2;

pub struct PreviewContentCommand {
    pub page_id: Uuid,
    pub content: ContentInput,
}

impl PageLifecycleService {
    /// Upsert the ephemeral working copy for a (page, language) slot. The
    /// slot is a singleton: a second preview overwrites the first in place
    /// rather than accumulating rows. Previews never enter audit history
    /// (no revision, no category links) and expire shortly.
    pub async fn preview_content(
        &self,
        command: PreviewContentCommand,
    ) -> ApplicationResult<PreviewDto> {
        let page_id = PageId::from(command.page_id);
        let page = self
            .store
            .find_page(page_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let mut draft = self.normalize_content(command.content)?;
        // Preview state is forced regardless of caller input.
        draft.workflow = WorkflowStatus::Unpublished;
        draft.published = false;
        draft.revision = None;
        draft.category_ids = Vec::new();

        self.ensure_urls_available(&draft.url, draft.url_alias.as_ref(), Some(page_id))
            .await?;

        let now = self.clock.now();
        let language = draft.language;
        let mut version = draft.into_new_version(page_id, ContentMode::Preview, None, now);
        version.expires_at = Some(now + Duration::hours(PREVIEW_TTL_HOURS));

        let existing = self.store.find_preview(page_id, language).await?;

        let mut tx = self.store.begin().await?;
        let stored = match existing {
            Some(previous) => tx.replace_preview(previous.id, version).await?,
            None => tx.insert_content(version).await?,
        };
        tx.commit().await?;

        let preview_url = format!(
            "{}/preview/{}/{}?id={}",
            self.app_base_url.trim_end_matches('/'),
            stored.language.code(),
            page.kind.as_str(),
            stored.id,
        );

        Ok(PreviewDto {
            preview_url,
            content: stored.into(),
        })
    }
}
