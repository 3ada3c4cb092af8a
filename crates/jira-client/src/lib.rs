pub mod client;
pub mod config;
pub mod error;

pub use client::JiraClient;
pub use config::JiraConfig;
pub use error::{ClientError, Result};
