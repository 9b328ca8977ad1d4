use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::models::{FetchError, PageRecord};

#[async_trait]
pub trait WikiPageSource: Send + Sync {
    /// Issues one GET against a fully built query URL and returns the pages
    /// it describes, ordered by search rank when the API provides one.
    async fn fetch_pages(
        &self,
        url: &str,
        cancellation: &CancellationToken,
    ) -> Result<Vec<PageRecord>, FetchError>;
}
