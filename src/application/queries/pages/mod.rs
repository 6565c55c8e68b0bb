mod current_content;
mod get_by_id;
mod revisions;
mod service;

pub use service::PageQueryService;
