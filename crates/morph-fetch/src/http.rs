//! reqwest-backed page fetcher

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use crate::error::FetchError;
use crate::fetcher::PageFetcher;
use crate::Result;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Morph)";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);
const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Plain-GET page fetcher.
///
/// No custom headers beyond the user agent, no retries. The response status
/// is logged but not inspected: any body that comes back is handed to the
/// parser like a full HTML document.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_options(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT, DEFAULT_MAX_REDIRECTS)
    }

    pub fn with_options(
        user_agent: &str,
        timeout: Duration,
        max_redirects: usize,
    ) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(max_redirects))
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> BoxFuture<'_, Result<String>> {
        let url = url.clone();

        Box::pin(async move {
            if !matches!(url.scheme(), "http" | "https") {
                return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
            }

            let response = self.client.get(url.clone()).send().await?;

            tracing::debug!(url = %url, status = %response.status(), "Page fetched");

            Ok(response.text().await?)
        })
    }
}
