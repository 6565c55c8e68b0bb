// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

/// Short random string appended to cloned urls and aliases during page
/// duplication, so near-identical clones clear the uniqueness guard without
/// caller input.
pub trait UrlSuffixGenerator: Send + Sync {
    fn suffix(&self, len: usize) -> String;
}
