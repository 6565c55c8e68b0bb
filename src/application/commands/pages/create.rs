// src/application/commands/pages/create.rs
use super::service::{PageLifecycleService, mode_for};
use crate::{
    application::{
        commands::pages::input::ContentInput,
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{NewPage, PageKind},
};

pub struct CreatePageCommand {
    pub kind: PageKind,
    /// A page is born with exactly one language's content.
    pub contents: Vec<ContentInput>,
}

impl PageLifecycleService {
    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let mut contents = command.contents;
        let input = match contents.len() {
            0 => return Err(ApplicationError::MissingContent),
            1 => contents.remove(0),
            n => return Err(ApplicationError::TooManyContents(n)),
        };

        let draft = self.normalize_content(input)?;
        let revision = draft
            .revision
            .clone()
            .ok_or(ApplicationError::NoRevisionFound)?;

        // No page id exists yet, so the check is global.
        self.ensure_urls_available(&draft.url, draft.url_alias.as_ref(), None)
            .await?;

        let now = self.clock.now();
        let mode = mode_for(draft.workflow);

        let mut tx = self.store.begin().await?;
        let page = tx
            .insert_page(NewPage {
                kind: command.kind,
                created_at: now,
                updated_at: now,
            })
            .await?;
        let content = tx
            .insert_content(draft.into_new_version(page.id, mode, Some(revision), now))
            .await?;
        tx.commit().await?;

        Ok(PageDto::from_parts(page, vec![content]))
    }
}
