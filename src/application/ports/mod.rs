// src/application/ports/mod.rs
pub mod notify;
pub mod time;
pub mod util;
