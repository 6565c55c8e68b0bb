// src/application/commands/pages/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{
        commands::pages::input::ContentInput,
        error::{ApplicationError, ApplicationResult},
        ports::{
            notify::{NotificationSender, NotificationTemplate},
            time::Clock,
            util::{SlugGenerator, UrlSuffixGenerator},
        },
    },
    domain::page::{
        CategoryId, ContentMode, ContentVersion, Language, NewComponent, NewContentVersion,
        NewMetaTag, NewRevision, PageId, PageStore, Title, Url, UrlAlias, WorkflowStatus,
        services::UrlUniquenessGuard,
    },
};

/// Length of the random suffix appended to cloned urls during duplication.
pub(super) const DUPLICATE_SUFFIX_LEN: usize = 3;

/// The versioning engine: every state transition a content version can go
/// through (create, supersede, revert, duplicate, preview) lives here, one
/// implementation shared by all three page kinds.
pub struct PageLifecycleService {
    pub(super) store: Arc<dyn PageStore>,
    pub(super) uniqueness: Arc<UrlUniquenessGuard>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) suffixes: Arc<dyn UrlSuffixGenerator>,
    pub(super) notifier: Arc<dyn NotificationSender>,
    pub(super) app_base_url: String,
}

impl PageLifecycleService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<dyn PageStore>,
        uniqueness: Arc<UrlUniquenessGuard>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn UrlSuffixGenerator>,
        notifier: Arc<dyn NotificationSender>,
        app_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            uniqueness,
            clock,
            slugger,
            suffixes,
            notifier,
            app_base_url: app_base_url.into(),
        }
    }

    /// Validate raw caller input into domain values. Runs before any write;
    /// a failure here leaves the store untouched.
    pub(super) fn normalize_content(
        &self,
        input: ContentInput,
    ) -> ApplicationResult<NormalizedContent> {
        let title = Title::new(input.title)?;

        let url = if input.url.trim().is_empty() {
            Url::new(self.slugger.slugify(title.as_str()))?
        } else {
            Url::new(input.url)?
        };

        let url_alias = input
            .url_alias
            .filter(|alias| !alias.trim().is_empty())
            .map(UrlAlias::new)
            .transpose()?;

        let published = input.workflow_status.is_published();
        let revision = input.revision.map(|revision| NewRevision {
            author: revision.author,
            message: revision.message,
            description: revision.description,
            published,
        });

        Ok(NormalizedContent {
            language: input.language,
            title,
            body: input.body,
            url,
            url_alias,
            workflow: input.workflow_status,
            published,
            meta_tag: input.meta_tag.map(|meta| NewMetaTag {
                title: meta.title,
                description: meta.description,
                keywords: meta.keywords,
            }),
            components: input
                .components
                .into_iter()
                .map(|component| NewComponent {
                    kind: component.kind,
                    payload: component.payload,
                    position: component.position,
                })
                .collect(),
            category_ids: input
                .category_ids
                .into_iter()
                .map(CategoryId::from)
                .collect(),
            revision,
        })
    }

    /// Uniqueness gate shared by every mutating operation. `exclude_page`
    /// carries the page being edited so it cannot collide with itself.
    pub(super) async fn ensure_urls_available(
        &self,
        url: &Url,
        url_alias: Option<&UrlAlias>,
        exclude_page: Option<PageId>,
    ) -> ApplicationResult<()> {
        if self.uniqueness.is_url_duplicate(url, exclude_page).await? {
            return Err(ApplicationError::DuplicateUrl(url.as_str().to_string()));
        }
        if let Some(alias) = url_alias {
            if self
                .uniqueness
                .is_alias_duplicate(alias, exclude_page)
                .await?
            {
                return Err(ApplicationError::DuplicateUrlAlias(
                    alias.as_str().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Detached best-effort dispatch after a committed supersede. The
    /// caller's response does not wait on this, and a sender failure is
    /// terminal-logged only.
    pub(super) fn dispatch_design_approval(
        &self,
        content: &ContentVersion,
        recipients: Vec<String>,
    ) {
        if content.workflow != WorkflowStatus::WaitingDesign || recipients.is_empty() {
            return;
        }

        let notifier = Arc::clone(&self.notifier);
        let data = serde_json::json!({
            "title": content.title.as_str(),
            "url": content.url.as_str(),
            "language": content.language.code(),
        });
        tokio::spawn(async move {
            if let Err(err) = notifier
                .send(NotificationTemplate::DesignApproval, recipients, data)
                .await
            {
                tracing::warn!(error = %err, "design approval notification failed");
            }
        });
    }
}

/// The mode a freshly created current version gets from its workflow state.
pub(super) fn mode_for(workflow: WorkflowStatus) -> ContentMode {
    if workflow.is_published() {
        ContentMode::Published
    } else {
        ContentMode::Draft
    }
}

/// Validated content ready to become a [`NewContentVersion`] once the engine
/// decides the owning page, mode and revision.
pub(super) struct NormalizedContent {
    pub language: Language,
    pub title: Title,
    pub body: String,
    pub url: Url,
    pub url_alias: Option<UrlAlias>,
    pub workflow: WorkflowStatus,
    pub published: bool,
    pub meta_tag: Option<NewMetaTag>,
    pub components: Vec<NewComponent>,
    pub category_ids: Vec<CategoryId>,
    pub revision: Option<NewRevision>,
}

impl NormalizedContent {
    pub fn into_new_version(
        self,
        page_id: PageId,
        mode: ContentMode,
        revision: Option<NewRevision>,
        now: DateTime<Utc>,
    ) -> NewContentVersion {
        NewContentVersion {
            page_id,
            language: self.language,
            title: self.title,
            body: self.body,
            url: self.url,
            url_alias: self.url_alias,
            mode,
            workflow: self.workflow,
            published: self.published,
            expires_at: None,
            meta_tag: self.meta_tag,
            components: self.components,
            category_ids: self.category_ids,
            revision,
            created_at: now,
            updated_at: now,
        }
    }
}
