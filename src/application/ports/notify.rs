use crate::application::error::ApplicationResult;
use async_trait::async_trait;

/// Message templates the engine can request. Rendering and delivery are the
/// sender's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTemplate {
    DesignApproval,
}

/// Outbound notification capability. The engine only ever calls this after
/// its own transaction has committed, from a detached task: delivery is
/// best-effort and a failure must never reach the original caller.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(
        &self,
        template: NotificationTemplate,
        recipients: Vec<String>,
        data: serde_json::Value,
    ) -> ApplicationResult<()>;
}
