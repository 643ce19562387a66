use crate::domain::ports::{ConfigProvider, PageFetcher};
use crate::utils::error::{ClientError, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

pub const DEFAULT_USER_AGENT: &str = concat!("cwgc-records/", env!("CARGO_PKG_VERSION"));

/// Single blocking GET per page. No retry is attempted here.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(config.user_agent().unwrap_or(DEFAULT_USER_AGENT).to_string());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("Requesting record page: {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        tracing::debug!("Record page response status: {}", status);

        if status.is_success() {
            let body = response.text()?;
            tracing::debug!("Read {} bytes from {}", body.len(), url);
            return Ok(body);
        }

        let error = status_error(status, url);
        tracing::warn!("Record page request failed: {}", error);
        Err(error)
    }
}

/// Map a non-success status onto the error taxonomy: 503 and 504 are
/// transient, everything else is a plain fetch failure.
pub fn status_error(status: StatusCode, url: &str) -> ClientError {
    match status {
        StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            ClientError::ServerUnavailable {
                status,
                url: url.to_string(),
            }
        }
        _ => ClientError::FetchFailed {
            status,
            url: url.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        let url = "http://www.cwgc.org/find-war-dead/casualty/1";
        assert!(matches!(
            status_error(StatusCode::SERVICE_UNAVAILABLE, url),
            ClientError::ServerUnavailable { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::GATEWAY_TIMEOUT, url),
            ClientError::ServerUnavailable { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, url),
            ClientError::FetchFailed { .. }
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, url),
            ClientError::FetchFailed { .. }
        ));
    }
}
