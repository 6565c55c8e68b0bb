// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::pages::PageLifecycleService,
        ports::{
            notify::NotificationSender,
            time::Clock,
            util::{SlugGenerator, UrlSuffixGenerator},
        },
        queries::pages::PageQueryService,
    },
    domain::page::{PageStore, services::UrlUniquenessGuard},
};

pub struct ApplicationServices {
    pub page_lifecycle: Arc<PageLifecycleService>,
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn PageStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn UrlSuffixGenerator>,
        notifier: Arc<dyn NotificationSender>,
        app_base_url: impl Into<String>,
    ) -> Self {
        let uniqueness = Arc::new(UrlUniquenessGuard::new(Arc::clone(&store)));

        let page_lifecycle = Arc::new(PageLifecycleService::new(
            Arc::clone(&store),
            uniqueness,
            clock,
            slugger,
            suffixes,
            notifier,
            app_base_url,
        ));
        let page_queries = Arc::new(PageQueryService::new(store));

        Self {
            page_lifecycle,
            page_queries,
        }
    }
}
