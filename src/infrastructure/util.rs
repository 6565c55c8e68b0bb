use crate::application::ports::util::{SlugGenerator, UrlSuffixGenerator};
use rand::Rng;
use rand::distributions::Alphanumeric;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Lowercase alphanumeric suffixes for cloned urls. Collision avoidance is
/// probabilistic, not proven; the uniqueness indexes remain the backstop.
#[derive(Default, Clone)]
pub struct AlphanumericSuffixGenerator;

impl UrlSuffixGenerator for AlphanumericSuffixGenerator {
    fn suffix(&self, len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(|byte| (byte as char).to_ascii_lowercase())
            .collect()
    }
}
