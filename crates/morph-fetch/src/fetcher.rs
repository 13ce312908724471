//! Transport trait for page fetches

use futures_util::future::BoxFuture;
use url::Url;

use crate::Result;

/// Fetches the document at a URL and returns the response body as text.
///
/// Implementations must be usable behind `Arc<dyn PageFetcher>`; the
/// returned future borrows the fetcher only.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> BoxFuture<'_, Result<String>>;
}
