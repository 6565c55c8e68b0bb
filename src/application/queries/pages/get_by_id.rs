use super::service::PageQueryService;
use crate::{
    application::{
        dto::{ContentVersionDto, PageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{ContentId, PageId},
};
use uuid::Uuid;

impl PageQueryService {
    /// A page together with its non-history versions (current rows across
    /// languages, plus previews).
    pub async fn get_page(&self, id: Uuid) -> ApplicationResult<PageDto> {
        let page_id = PageId::from(id);
        let page = self
            .store
            .find_page(page_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;
        let contents = self.store.list_page_contents(page_id, false).await?;
        Ok(PageDto::from_parts(page, contents))
    }

    /// A single version in any mode, history rows included.
    pub async fn get_content(&self, id: Uuid) -> ApplicationResult<ContentVersionDto> {
        let content = self
            .store
            .find_content(ContentId::from(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("content version not found"))?;
        Ok(content.into())
    }
}
