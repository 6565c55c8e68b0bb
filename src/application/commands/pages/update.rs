// src/application/commands/pages/update.rs
use super::service::{PageLifecycleService, mode_for};
use crate::{
    application::{
        commands::pages::input::ContentInput,
        dto::ContentVersionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::ContentId,
};
use uuid::Uuid;

pub struct UpdateContentCommand {
    /// The currently live version this update supersedes.
    pub previous_content_id: Uuid,
    pub content: ContentInput,
    /// Recipients for the design-approval notification, when the new version
    /// enters the waiting-design workflow state.
    pub approval_emails: Vec<String>,
}

impl PageLifecycleService {
    /// Supersede a live content version: the previous row is archived (never
    /// deleted, never edited), and the new state lands as a brand-new row
    /// with fresh identities. Language is pinned to the previous version's;
    /// only the dedicated cross-language duplication may change it.
    pub async fn update_content(
        &self,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentVersionDto> {
        let previous_id = ContentId::from(command.previous_content_id);
        let previous = self
            .store
            .find_content(previous_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content version not found"))?;

        if !previous.is_active() {
            return Err(ApplicationError::conflict(
                "only an active content version can be superseded",
            ));
        }

        let mut draft = self.normalize_content(command.content)?;
        draft.language = previous.language;

        let revision = draft
            .revision
            .clone()
            .ok_or(ApplicationError::NoRevisionFound)?;

        self.ensure_urls_available(&draft.url, draft.url_alias.as_ref(), Some(previous.page_id))
            .await?;

        let now = self.clock.now();
        let mode = mode_for(draft.workflow);

        let mut tx = self.store.begin().await?;
        tx.archive_content(previous.id).await?;
        let created = tx
            .insert_content(draft.into_new_version(previous.page_id, mode, Some(revision), now))
            .await?;
        tx.touch_page(previous.page_id, now).await?;
        tx.commit().await?;

        self.dispatch_design_approval(&created, command.approval_emails);

        Ok(created.into())
    }
}
