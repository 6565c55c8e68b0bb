use super::service::PageQueryService;
use crate::{
    application::{
        dto::ContentVersionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{Language, PageId},
};
use uuid::Uuid;

impl PageQueryService {
    /// The live version for one (page, language) slot.
    pub async fn current_content(
        &self,
        page_id: Uuid,
        language: Language,
    ) -> ApplicationResult<ContentVersionDto> {
        let content = self
            .store
            .find_active_content(PageId::from(page_id), language)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found("no active content version for this language")
            })?;
        Ok(content.into())
    }
}
