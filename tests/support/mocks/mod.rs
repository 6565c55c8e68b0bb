// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notify;
pub mod page_store;
pub mod time;
pub mod util;

pub use notify::{RecordingNotificationSender, SentNotification};
pub use page_store::InMemoryPageStore;
pub use time::{FixedClock, fixed_now};
pub use util::SequentialSuffixGenerator;
