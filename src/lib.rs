pub mod config;
pub mod error;
pub mod gitlab;
pub mod ranking;
pub mod ui;

pub use error::{Result, TagListError};
