// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use verso_core::application::ports::util::UrlSuffixGenerator;

/// Deterministic suffixes: "000", "001", ... so cloned urls are predictable.
#[derive(Default)]
pub struct SequentialSuffixGenerator {
    counter: AtomicUsize,
}

impl UrlSuffixGenerator for SequentialSuffixGenerator {
    fn suffix(&self, len: usize) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        format!("{n:0len$}")
    }
}
