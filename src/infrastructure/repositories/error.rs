use crate::domain::errors::DomainError;

const CNT_CONTENT_PAGE: &str = "content_versions_page_id_fkey";
const CNT_ACTIVE_SLOT: &str = "uq_content_versions_active";
const CNT_PREVIEW_SLOT: &str = "uq_content_versions_preview";
const CNT_REVISION_CONTENT: &str = "revisions_content_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CONTENT_PAGE => DomainError::NotFound("page not found".into()),
                    CNT_ACTIVE_SLOT => DomainError::Conflict(
                        "language slot already has an active content version".into(),
                    ),
                    CNT_PREVIEW_SLOT => {
                        DomainError::Conflict("preview slot already occupied".into())
                    }
                    CNT_REVISION_CONTENT => {
                        DomainError::Conflict("content version already has a revision".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
