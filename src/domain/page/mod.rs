pub mod component;
pub mod entity;
pub mod repository;
pub mod revision;
pub mod services;
pub mod value_objects;

pub use component::{Component, MetaTag, NewComponent, NewMetaTag};
pub use entity::{ContentVersion, NewContentVersion, NewPage, Page};
pub use repository::{PageStore, PageStoreTx};
pub use revision::{NewRevision, Revision};
pub use value_objects::{
    CategoryId, ComponentId, ContentId, ContentMode, Language, MetaTagId, PageId, PageKind,
    RevisionId, Title, Url, UrlAlias, WorkflowStatus,
};
