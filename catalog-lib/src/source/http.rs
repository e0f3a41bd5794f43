//! HTTP record source

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use super::RecordSource;
use super::SourceConfig;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Page;

/// Fetches pages from a JSON endpoint.
///
/// Requests `GET {base_url}?page=N&pageSize=M` and expects a body of the form
/// `{"records": [...], "totalCount": n, "pageSize": n, "totalPages": n,
/// "currentPage": n}`. Cheap to clone (uses `Arc` internally).
#[derive(Clone)]
pub struct HttpRecordSource {
    inner: Arc<HttpRecordSourceInner>,
}

struct HttpRecordSourceInner {
    endpoint: Url,
    page_size: usize,
    timeout: Option<Duration>,
    http_client: Client,
}

impl HttpRecordSource {
    /// Creates a source from a validated config.
    pub fn new(config: SourceConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder.build().map_err(ApiError::from)?;
        Self::with_client(config, http_client)
    }

    /// Creates a source that sends requests through `http_client`.
    pub fn with_client(config: SourceConfig, http_client: Client) -> Result<Self, Error> {
        let endpoint = config.validate()?;
        Ok(Self {
            inner: Arc::new(HttpRecordSourceInner {
                endpoint,
                page_size: config.page_size,
                timeout: config.timeout,
                http_client,
            }),
        })
    }

    /// Returns the endpoint pages are fetched from.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Returns the configured page size.
    pub fn page_size(&self) -> usize {
        self.inner.page_size
    }

    /// Builds the request URL for a page.
    ///
    /// Query parameters already present on the endpoint are kept.
    pub fn page_url(&self, page_number: u32) -> Url {
        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &page_number.to_string())
            .append_pair("pageSize", &self.inner.page_size.to_string());
        url
    }

    fn map_send_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_page(&self, page_number: u32) -> Result<Page, Error> {
        if page_number == 0 {
            return Err(ValidationError::PageNumber(page_number).into());
        }

        let url = self.page_url(page_number);
        debug!("GET {}", url);

        let mut request = self.inner.http_client.get(url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let page: Page = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body.clone()))?;
        debug!(
            "Page {} returned {} of {} records",
            page_number,
            page.len(),
            page.total_count()
        );
        Ok(page)
    }
}

impl std::fmt::Debug for HttpRecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRecordSource")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("page_size", &self.inner.page_size)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}
