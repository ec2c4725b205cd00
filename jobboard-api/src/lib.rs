pub mod config;
pub mod database;
pub mod fixtures;
pub mod handlers;
pub mod helpers;
pub mod search;

pub use database::Database;
pub use search::{JobError, JobSearch};
