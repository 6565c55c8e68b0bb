// tests/support/mocks/notify.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use verso_core::application::error::{ApplicationError, ApplicationResult};
use verso_core::application::ports::notify::{NotificationSender, NotificationTemplate};

pub struct SentNotification {
    pub template: NotificationTemplate,
    pub recipients: Vec<String>,
    pub data: serde_json::Value,
}

/// Sender that records every request, optionally failing to prove the
/// engine swallows delivery errors.
#[derive(Default)]
pub struct RecordingNotificationSender {
    pub sent: Mutex<Vec<SentNotification>>,
    fail: AtomicBool,
}

impl RecordingNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotificationSender {
    async fn send(
        &self,
        template: NotificationTemplate,
        recipients: Vec<String>,
        data: serde_json::Value,
    ) -> ApplicationResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApplicationError::infrastructure("smtp unavailable"));
        }
        self.sent.lock().unwrap().push(SentNotification {
            template,
            recipients,
            data,
        });
        Ok(())
    }
}
