pub mod database;
pub mod notify;
pub mod repositories;
pub mod time;
pub mod util;
