//! Record source configuration

use std::time::Duration;

use url::Url;

use crate::error::ApiError;
use crate::error::Error;

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Configuration for a remote record source.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use catalog_lib::source::SourceConfig;
///
/// let config = SourceConfig::new("https://shop.example/api/items")
///     .with_page_size(25)
///     .with_timeout(Duration::from_secs(10));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Endpoint that serves pages.
    pub base_url: String,

    /// Records per page, sent as the `pageSize` query parameter.
    ///
    /// Default: 12
    pub page_size: usize,

    /// Whole-request timeout.
    ///
    /// Default: none
    pub timeout: Option<Duration>,

    /// Connection timeout, applied when building the HTTP client.
    ///
    /// Default: none
    pub connect_timeout: Option<Duration>,
}

impl SourceConfig {
    /// Creates a config for the given endpoint with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Checks the settings and returns the parsed endpoint.
    pub fn validate(&self) -> Result<Url, Error> {
        if self.page_size == 0 {
            return Err(Error::config("page size must be at least 1"));
        }
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ApiError::InvalidUrl(format!("unsupported scheme '{}'", other)).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SourceConfig::new("http://localhost:8080/items");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.timeout.is_none());
        assert_eq!(config.validate().unwrap().path(), "/items");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = SourceConfig::new("http://localhost/items").with_page_size(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_urls_rejected() {
        for url in ["not a url", "ftp://host/items"] {
            let result = SourceConfig::new(url).validate();
            assert!(
                matches!(result, Err(Error::Api(ApiError::InvalidUrl(_)))),
                "{url} should be rejected"
            );
        }
    }
}
