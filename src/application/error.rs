// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("a page must be created with exactly one content version, none was given")]
    MissingContent,

    #[error("a page must be created with exactly one content version, {0} were given")]
    TooManyContents(usize),

    #[error("url is already in use: {0}")]
    DuplicateUrl(String),

    #[error("url alias is already in use: {0}")]
    DuplicateUrlAlias(String),

    #[error("a revision is required for this operation")]
    NoRevisionFound,

    #[error("page has no content eligible for duplication")]
    NoNewContentToDuplicate,

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
