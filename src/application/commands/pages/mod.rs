mod create;
mod duplicate;
mod input;
mod preview;
mod revert;
mod service;
mod update;

pub use create::CreatePageCommand;
pub use duplicate::{DuplicateContentCommand, DuplicatePageCommand};
pub use input::{ComponentInput, ContentInput, MetaTagInput, RevisionInput};
pub use preview::PreviewContentCommand;
pub use revert::RevertContentCommand;
pub use service::PageLifecycleService;
pub use update::UpdateContentCommand;
