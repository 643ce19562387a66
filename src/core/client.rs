use crate::config::ClientConfig;
use crate::core::document::RecordPage;
use crate::core::extract;
use crate::core::fetch::HttpFetcher;
use crate::domain::model::Record;
use crate::domain::ports::{ConfigProvider, PageFetcher};
use crate::utils::error::{ClientError, Result};

/// Scraper for individual casualty pages of the CWGC register.
///
/// ```no_run
/// use cwgc_records::{ClientConfig, RecordClient};
///
/// let client = RecordClient::new(&ClientConfig::default())?;
/// let record = client.get_details(
///     "http://www.cwgc.org/find-war-dead/casualty/313405/CRISFORD,%20WILFRED%20REGINALD%20EDGAR",
/// )?;
/// println!("{} ({:?})", record.name, record.rank);
/// # Ok::<(), cwgc_records::ClientError>(())
/// ```
pub struct RecordClient<F: PageFetcher = HttpFetcher> {
    fetcher: F,
    base_url: String,
}

impl RecordClient<HttpFetcher> {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: PageFetcher> RecordClient<F> {
    pub fn with_fetcher<C: ConfigProvider>(fetcher: F, config: &C) -> Self {
        Self {
            fetcher,
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `url` and extract its record. Fetch errors and a missing name
    /// fail the call; every other field degrades to `None`.
    pub fn get_details(&self, url: &str) -> Result<Record> {
        let body = self.fetcher.fetch(url)?;
        self.parse_details(url, &body)
    }

    /// Extract a record from markup already in hand.
    pub fn parse_details(&self, url: &str, markup: &str) -> Result<Record> {
        let page = RecordPage::parse(markup);

        let name = extract::name(&page).ok_or_else(|| ClientError::MissingName {
            url: url.to_string(),
        })?;
        let mut record = Record::new(url, name);

        for label in extract::RECORD_FIELDS {
            let key = extract::field_key(label);
            record.assign(&key, extract::field_value(&page, label));
        }
        record.additional_information = extract::additional_information(&page);
        record.set_service(extract::service_details(&page));
        record.cemetery = extract::cemetery(&page, &self.base_url);

        tracing::debug!(
            "Extracted record '{}' (rank: {:?}, cemetery: {:?})",
            record.name,
            record.rank,
            record.cemetery.name
        );
        Ok(record)
    }
}
