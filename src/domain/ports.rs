use crate::utils::error::Result;
use std::time::Duration;

/// Retrieves the raw markup of a record page.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    /// Site root that relative cemetery links are appended to.
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> Option<&str>;
}
