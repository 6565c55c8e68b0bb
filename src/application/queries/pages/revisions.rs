use super::service::PageQueryService;
use crate::{
    application::{dto::RevisionDto, error::ApplicationResult},
    domain::page::PageId,
};
use uuid::Uuid;

impl PageQueryService {
    /// Audit trail of a page: the revision of every version it ever owned,
    /// newest first.
    pub async fn page_revisions(&self, page_id: Uuid) -> ApplicationResult<Vec<RevisionDto>> {
        let revisions = self.store.list_revisions(PageId::from(page_id)).await?;
        Ok(revisions.into_iter().map(Into::into).collect())
    }
}
