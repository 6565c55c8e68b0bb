pub mod pages;

pub use pages::{
    ComponentDto, ContentVersionDto, MetaTagDto, PageDto, PreviewDto, RevisionDto,
};
