// src/application/commands/pages/revert.rs
use super::service::PageLifecycleService;
use crate::{
    application::{
        commands::pages::input::RevisionInput,
        dto::ContentVersionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{ContentMode, NewRevision, RevisionId},
};
use uuid::Uuid;

pub struct RevertContentCommand {
    /// Revision identifying the historical snapshot to restore.
    pub revision_id: Uuid,
    /// Fresh audit metadata for the restored version.
    pub revision: RevisionInput,
}

impl PageLifecycleService {
    /// Restore a historical snapshot as the new live draft. The snapshot row
    /// stays untouched in history; its content fields are rebuilt into a new
    /// row, and whatever is currently active for that (page, language) slot
    /// is archived first. History is never overwritten in place.
    pub async fn revert_content(
        &self,
        command: RevertContentCommand,
    ) -> ApplicationResult<ContentVersionDto> {
        let revision = self
            .store
            .find_revision(RevisionId::from(command.revision_id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("revision not found"))?;
        let snapshot = self
            .store
            .find_content(revision.content_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content version not found"))?;

        // The snapshot's url was released when it was archived; another page
        // may have claimed it since.
        self.ensure_urls_available(
            &snapshot.url,
            snapshot.url_alias.as_ref(),
            Some(snapshot.page_id),
        )
        .await?;

        let current = self
            .store
            .find_active_content(snapshot.page_id, snapshot.language)
            .await?;

        let now = self.clock.now();
        let new_revision = NewRevision {
            author: command.revision.author,
            message: command.revision.message,
            description: command.revision.description,
            published: snapshot.published,
        };

        let mut tx = self.store.begin().await?;
        if let Some(current) = current {
            tx.archive_content(current.id).await?;
        }
        let restored = tx
            .insert_content(snapshot.to_new_version(
                snapshot.page_id,
                ContentMode::Draft,
                Some(new_revision),
                now,
            ))
            .await?;
        tx.touch_page(snapshot.page_id, now).await?;
        tx.commit().await?;

        Ok(restored.into())
    }
}
