// src/domain/page/services/mod.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::page::repository::PageStore;
use crate::domain::page::value_objects::{PageId, Url, UrlAlias};

/// Domain service enforcing url and alias uniqueness across active content.
///
/// Archived history rows never count toward a collision: a superseded
/// version may legitimately share its url with its replacement. Passing the
/// owning page id excludes every row of that page, so editing a page's own
/// url is not a self-collision; passing `None` (page not created yet) makes
/// the check global.
pub struct UrlUniquenessGuard {
    store: Arc<dyn PageStore>,
}

impl UrlUniquenessGuard {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self { store }
    }

    pub async fn is_url_duplicate(
        &self,
        url: &Url,
        exclude_page: Option<PageId>,
    ) -> DomainResult<bool> {
        self.store.url_in_use(url, exclude_page).await
    }

    pub async fn is_alias_duplicate(
        &self,
        alias: &UrlAlias,
        exclude_page: Option<PageId>,
    ) -> DomainResult<bool> {
        self.store.alias_in_use(alias, exclude_page).await
    }
}
