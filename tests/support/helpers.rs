// tests/support/helpers.rs
use std::sync::Arc;

use verso_core::application::commands::pages::PageLifecycleService;
use verso_core::application::ports::notify::NotificationSender;
use verso_core::application::ports::time::Clock;
use verso_core::application::queries::pages::PageQueryService;
use verso_core::domain::page::{PageStore, services::UrlUniquenessGuard};
use verso_core::infrastructure::util::DefaultSlugGenerator;

use super::mocks::{
    FixedClock, InMemoryPageStore, RecordingNotificationSender, SequentialSuffixGenerator,
};

pub const TEST_BASE_URL: &str = "http://editor.local";

/// Fully wired lifecycle engine over in-memory collaborators.
pub struct TestEngine {
    pub store: Arc<InMemoryPageStore>,
    pub clock: Arc<FixedClock>,
    pub sender: Arc<RecordingNotificationSender>,
    pub lifecycle: PageLifecycleService,
    pub queries: PageQueryService,
}

pub fn engine() -> TestEngine {
    let store = Arc::new(InMemoryPageStore::new());
    let clock = Arc::new(FixedClock::new());
    let sender = Arc::new(RecordingNotificationSender::new());

    let store_port: Arc<dyn PageStore> = store.clone();
    let clock_port: Arc<dyn Clock> = clock.clone();
    let sender_port: Arc<dyn NotificationSender> = sender.clone();
    let uniqueness = Arc::new(UrlUniquenessGuard::new(store_port.clone()));

    let lifecycle = PageLifecycleService::new(
        store_port.clone(),
        uniqueness,
        clock_port,
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequentialSuffixGenerator::default()),
        sender_port,
        TEST_BASE_URL,
    );
    let queries = PageQueryService::new(store_port);

    TestEngine {
        store,
        clock,
        sender,
        lifecycle,
        queries,
    }
}
