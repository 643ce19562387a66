pub mod client;
pub mod document;
pub mod extract;
pub mod fetch;

pub use crate::domain::model::{Cemetery, Record, ServiceDetails};
pub use crate::domain::ports::{ConfigProvider, PageFetcher};
pub use crate::utils::error::Result;
