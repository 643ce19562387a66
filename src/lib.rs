pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{ClientConfig, CWGC_URL};
pub use crate::core::{client::RecordClient, fetch::HttpFetcher};
pub use crate::domain::model::{Cemetery, Record};
pub use crate::utils::error::{ClientError, Result};
