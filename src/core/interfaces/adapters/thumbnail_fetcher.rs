use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::models::{FetchError, PreviewImage};

#[async_trait]
pub trait ThumbnailFetcher: Send + Sync {
    async fn fetch_thumbnail(
        &self,
        url: &str,
        cancellation: &CancellationToken,
    ) -> Result<PreviewImage, FetchError>;
}
