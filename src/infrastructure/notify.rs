use crate::application::error::ApplicationResult;
use crate::application::ports::notify::{NotificationSender, NotificationTemplate};
use async_trait::async_trait;

/// Sender that records the request in the log stream instead of delivering
/// it. Real delivery (SMTP or otherwise) is the surrounding infrastructure's
/// concern; this keeps the engine wirable without it.
#[derive(Default, Clone)]
pub struct LogNotificationSender;

#[async_trait]
impl NotificationSender for LogNotificationSender {
    async fn send(
        &self,
        template: NotificationTemplate,
        recipients: Vec<String>,
        data: serde_json::Value,
    ) -> ApplicationResult<()> {
        tracing::info!(
            ?template,
            recipients = recipients.len(),
            %data,
            "notification dispatched"
        );
        Ok(())
    }
}
