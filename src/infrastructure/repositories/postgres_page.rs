// src/infrastructure/repositories/postgres_page.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    CategoryId, Component, ComponentId, ContentId, ContentMode, ContentVersion, Language, MetaTag,
    MetaTagId, NewContentVersion, NewPage, Page, PageId, PageStore, PageStoreTx, Revision,
    RevisionId, Title, Url, UrlAlias, WorkflowStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresPageStore {
    pool: PgPool,
}

impl PostgresPageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: Uuid,
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::from(row.id),
            kind: row.kind.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: Uuid,
    page_id: Uuid,
    language: String,
    title: String,
    body: String,
    url: String,
    url_alias: Option<String>,
    mode: String,
    workflow_status: String,
    published: bool,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct RevisionRow {
    id: Uuid,
    content_id: Uuid,
    author: String,
    message: String,
    description: String,
    published: bool,
    created_at: DateTime<Utc>,
}

impl From<RevisionRow> for Revision {
    fn from(row: RevisionRow) -> Self {
        Revision {
            id: RevisionId::from(row.id),
            content_id: ContentId::from(row.content_id),
            author: row.author,
            message: row.message,
            description: row.description,
            published: row.published,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct MetaTagRow {
    id: Uuid,
    title: String,
    description: String,
    keywords: String,
}

impl From<MetaTagRow> for MetaTag {
    fn from(row: MetaTagRow) -> Self {
        MetaTag {
            id: MetaTagId::from(row.id),
            title: row.title,
            description: row.description,
            keywords: row.keywords,
        }
    }
}

#[derive(Debug, FromRow)]
struct ComponentRow {
    id: Uuid,
    kind: String,
    payload: serde_json::Value,
    position: i32,
}

impl From<ComponentRow> for Component {
    fn from(row: ComponentRow) -> Self {
        Component {
            id: ComponentId::from(row.id),
            kind: row.kind,
            payload: row.payload,
            position: row.position,
        }
    }
}

const CONTENT_COLUMNS: &str = "id, page_id, language, title, body, url, url_alias, mode, \
     workflow_status, published, expires_at, created_at, updated_at";

fn content_from_parts(
    row: ContentRow,
    revision: Option<Revision>,
    meta_tag: Option<MetaTag>,
    components: Vec<Component>,
    category_ids: Vec<CategoryId>,
) -> DomainResult<ContentVersion> {
    Ok(ContentVersion {
        id: ContentId::from(row.id),
        page_id: PageId::from(row.page_id),
        language: row.language.parse::<Language>()?,
        title: Title::new(row.title)?,
        body: row.body,
        url: Url::new(row.url)?,
        url_alias: row.url_alias.map(UrlAlias::new).transpose()?,
        mode: row.mode.parse::<ContentMode>()?,
        workflow: row.workflow_status.parse::<WorkflowStatus>()?,
        published: row.published,
        expires_at: row.expires_at,
        meta_tag,
        components,
        category_ids,
        revision,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

impl PostgresPageStore {
    /// Attach the owned sub-resources (revision, meta tag, components,
    /// category links) to a bare content row.
    async fn hydrate(&self, row: ContentRow) -> DomainResult<ContentVersion> {
        let revision = sqlx::query_as::<_, RevisionRow>(
            "SELECT id, content_id, author, message, description, published, created_at
             FROM revisions WHERE content_id = $1",
        )
        .bind(row.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(Revision::from);

        let meta_tag = sqlx::query_as::<_, MetaTagRow>(
            "SELECT id, title, description, keywords FROM meta_tags WHERE content_id = $1",
        )
        .bind(row.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .map(MetaTag::from);

        let components = sqlx::query_as::<_, ComponentRow>(
            "SELECT id, kind, payload, position FROM components
             WHERE content_id = $1 ORDER BY position",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(Component::from)
        .collect();

        let category_ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT category_id FROM content_categories WHERE content_id = $1",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(CategoryId::from)
        .collect();

        content_from_parts(row, revision, meta_tag, components, category_ids)
    }
}

#[async_trait]
impl PageStore for PostgresPageStore {
    async fn find_page(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(
            "SELECT id, kind, created_at, updated_at FROM pages WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_content(&self, id: ContentId) -> DomainResult<Option<ContentVersion>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content_versions WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_active_content(
        &self,
        page_id: PageId,
        language: Language,
    ) -> DomainResult<Option<ContentVersion>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content_versions
             WHERE page_id = $1 AND language = $2 AND mode IN ('draft', 'published')"
        ))
        .bind(page_id.as_uuid())
        .bind(language.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn list_page_contents(
        &self,
        page_id: PageId,
        include_histories: bool,
    ) -> DomainResult<Vec<ContentVersion>> {
        let query = if include_histories {
            format!(
                "SELECT {CONTENT_COLUMNS} FROM content_versions
                 WHERE page_id = $1 ORDER BY updated_at DESC"
            )
        } else {
            format!(
                "SELECT {CONTENT_COLUMNS} FROM content_versions
                 WHERE page_id = $1 AND mode <> 'histories' ORDER BY updated_at DESC"
            )
        };

        let rows = sqlx::query_as::<_, ContentRow>(&query)
            .bind(page_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut contents = Vec::with_capacity(rows.len());
        for row in rows {
            contents.push(self.hydrate(row).await?);
        }
        Ok(contents)
    }

    async fn find_preview(
        &self,
        page_id: PageId,
        language: Language,
    ) -> DomainResult<Option<ContentVersion>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content_versions
             WHERE page_id = $1 AND language = $2 AND mode = 'preview'"
        ))
        .bind(page_id.as_uuid())
        .bind(language.code())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_revision(&self, id: RevisionId) -> DomainResult<Option<Revision>> {
        let row = sqlx::query_as::<_, RevisionRow>(
            "SELECT id, content_id, author, message, description, published, created_at
             FROM revisions WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Revision::from))
    }

    async fn list_revisions(&self, page_id: PageId) -> DomainResult<Vec<Revision>> {
        let rows = sqlx::query_as::<_, RevisionRow>(
            "SELECT r.id, r.content_id, r.author, r.message, r.description, r.published,
                    r.created_at
             FROM revisions r
             JOIN content_versions c ON c.id = r.content_id
             WHERE c.page_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(page_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Revision::from).collect())
    }

    async fn url_in_use(&self, url: &Url, exclude_page: Option<PageId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM content_versions
                 WHERE url = $1
                   AND mode <> 'histories'
                   AND ($2::uuid IS NULL OR page_id <> $2)
             )",
        )
        .bind(url.as_str())
        .bind(exclude_page.map(|page| page.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn alias_in_use(
        &self,
        alias: &UrlAlias,
        exclude_page: Option<PageId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM content_versions
                 WHERE url_alias = $1
                   AND mode <> 'histories'
                   AND ($2::uuid IS NULL OR page_id <> $2)
             )",
        )
        .bind(alias.as_str())
        .bind(exclude_page.map(|page| page.as_uuid()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn begin(&self) -> DomainResult<Box<dyn PageStoreTx>> {
        let tx = self.pool.begin().await.map_err(map_sqlx)?;
        Ok(Box::new(PostgresPageTx { tx }))
    }
}

pub struct PostgresPageTx {
    tx: Transaction<'static, Postgres>,
}

impl PostgresPageTx {
    /// Persist the owned sub-resources of a version and return them with
    /// their freshly assigned identities.
    async fn insert_owned(
        &mut self,
        content_id: ContentId,
        content: &NewContentVersion,
    ) -> DomainResult<(
        Option<Revision>,
        Option<MetaTag>,
        Vec<Component>,
        Vec<CategoryId>,
    )> {
        let revision = match &content.revision {
            Some(new_revision) => {
                let id = RevisionId::generate();
                sqlx::query(
                    "INSERT INTO revisions (id, content_id, author, message, description,
                                            published, created_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(id.as_uuid())
                .bind(content_id.as_uuid())
                .bind(&new_revision.author)
                .bind(&new_revision.message)
                .bind(&new_revision.description)
                .bind(new_revision.published)
                .bind(content.created_at)
                .execute(&mut *self.tx)
                .await
                .map_err(map_sqlx)?;

                Some(Revision {
                    id,
                    content_id,
                    author: new_revision.author.clone(),
                    message: new_revision.message.clone(),
                    description: new_revision.description.clone(),
                    published: new_revision.published,
                    created_at: content.created_at,
                })
            }
            None => None,
        };

        let meta_tag = match &content.meta_tag {
            Some(new_meta) => {
                let id = MetaTagId::generate();
                sqlx::query(
                    "INSERT INTO meta_tags (id, content_id, title, description, keywords)
                     VALUES ($1, $2, $3, $4, $5)",
                )
                .bind(id.as_uuid())
                .bind(content_id.as_uuid())
                .bind(&new_meta.title)
                .bind(&new_meta.description)
                .bind(&new_meta.keywords)
                .execute(&mut *self.tx)
                .await
                .map_err(map_sqlx)?;

                Some(MetaTag {
                    id,
                    title: new_meta.title.clone(),
                    description: new_meta.description.clone(),
                    keywords: new_meta.keywords.clone(),
                })
            }
            None => None,
        };

        let mut components = Vec::with_capacity(content.components.len());
        for new_component in &content.components {
            let id = ComponentId::generate();
            sqlx::query(
                "INSERT INTO components (id, content_id, kind, payload, position)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id.as_uuid())
            .bind(content_id.as_uuid())
            .bind(&new_component.kind)
            .bind(&new_component.payload)
            .bind(new_component.position)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

            components.push(Component {
                id,
                kind: new_component.kind.clone(),
                payload: new_component.payload.clone(),
                position: new_component.position,
            });
        }

        for category_id in &content.category_ids {
            sqlx::query(
                "INSERT INTO content_categories (content_id, category_id) VALUES ($1, $2)",
            )
            .bind(content_id.as_uuid())
            .bind(category_id.as_uuid())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;
        }

        Ok((revision, meta_tag, components, content.category_ids.clone()))
    }
}

#[async_trait]
impl PageStoreTx for PostgresPageTx {
    async fn insert_page(&mut self, page: NewPage) -> DomainResult<Page> {
        let id = PageId::generate();
        sqlx::query("INSERT INTO pages (id, kind, created_at, updated_at) VALUES ($1, $2, $3, $4)")
            .bind(id.as_uuid())
            .bind(page.kind.as_str())
            .bind(page.created_at)
            .bind(page.updated_at)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        Ok(Page {
            id,
            kind: page.kind,
            created_at: page.created_at,
            updated_at: page.updated_at,
        })
    }

    async fn insert_content(
        &mut self,
        content: NewContentVersion,
    ) -> DomainResult<ContentVersion> {
        let id = ContentId::generate();
        sqlx::query(
            "INSERT INTO content_versions (id, page_id, language, title, body, url, url_alias,
                                           mode, workflow_status, published, expires_at,
                                           created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(id.as_uuid())
        .bind(content.page_id.as_uuid())
        .bind(content.language.code())
        .bind(content.title.as_str())
        .bind(&content.body)
        .bind(content.url.as_str())
        .bind(content.url_alias.as_ref().map(UrlAlias::as_str))
        .bind(content.mode.as_str())
        .bind(content.workflow.as_str())
        .bind(content.published)
        .bind(content.expires_at)
        .bind(content.created_at)
        .bind(content.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        let (revision, meta_tag, components, category_ids) =
            self.insert_owned(id, &content).await?;

        Ok(ContentVersion {
            id,
            page_id: content.page_id,
            language: content.language,
            title: content.title,
            body: content.body,
            url: content.url,
            url_alias: content.url_alias,
            mode: content.mode,
            workflow: content.workflow,
            published: content.published,
            expires_at: content.expires_at,
            meta_tag,
            components,
            category_ids,
            revision,
            created_at: content.created_at,
            updated_at: content.updated_at,
        })
    }

    async fn archive_content(&mut self, id: ContentId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE content_versions SET mode = 'histories' WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("content version not found".into()));
        }
        Ok(())
    }

    async fn replace_preview(
        &mut self,
        id: ContentId,
        replacement: NewContentVersion,
    ) -> DomainResult<ContentVersion> {
        let result = sqlx::query(
            "UPDATE content_versions
             SET language = $2, title = $3, body = $4, url = $5, url_alias = $6, mode = $7,
                 workflow_status = $8, published = $9, expires_at = $10, created_at = $11,
                 updated_at = $12
             WHERE id = $1 AND mode = 'preview'",
        )
        .bind(id.as_uuid())
        .bind(replacement.language.code())
        .bind(replacement.title.as_str())
        .bind(&replacement.body)
        .bind(replacement.url.as_str())
        .bind(replacement.url_alias.as_ref().map(UrlAlias::as_str))
        .bind(replacement.mode.as_str())
        .bind(replacement.workflow.as_str())
        .bind(replacement.published)
        .bind(replacement.expires_at)
        .bind(replacement.created_at)
        .bind(replacement.updated_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("preview row not found".into()));
        }

        // Owned sub-resources are replaced wholesale, never merged.
        for table in ["revisions", "meta_tags", "components", "content_categories"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE content_id = $1"))
                .bind(id.as_uuid())
                .execute(&mut *self.tx)
                .await
                .map_err(map_sqlx)?;
        }

        let (revision, meta_tag, components, category_ids) =
            self.insert_owned(id, &replacement).await?;

        Ok(ContentVersion {
            id,
            page_id: replacement.page_id,
            language: replacement.language,
            title: replacement.title,
            body: replacement.body,
            url: replacement.url,
            url_alias: replacement.url_alias,
            mode: replacement.mode,
            workflow: replacement.workflow,
            published: replacement.published,
            expires_at: replacement.expires_at,
            meta_tag,
            components,
            category_ids,
            revision,
            created_at: replacement.created_at,
            updated_at: replacement.updated_at,
        })
    }

    async fn touch_page(&mut self, id: PageId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE pages SET updated_at = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(at)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.tx.commit().await.map_err(map_sqlx)
    }
}
