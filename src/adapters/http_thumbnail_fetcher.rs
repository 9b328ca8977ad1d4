use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::interfaces::adapters::ThumbnailFetcher;
use crate::core::models::{FetchError, PreviewImage};

pub struct HttpThumbnailFetcher {
    client: reqwest::Client,
}

impl HttpThumbnailFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Decoding and RGBA conversion are CPU bound; keep them off the async
    /// worker threads.
    async fn decode_off_runtime(bytes: Vec<u8>) -> Result<PreviewImage, FetchError> {
        tokio::task::spawn_blocking(move || PreviewImage::decode(&bytes))
            .await
            .map_err(|error| FetchError::ImageDecode(error.to_string()))?
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ThumbnailFetcher for HttpThumbnailFetcher {
    async fn fetch_thumbnail(
        &self,
        url: &str,
        cancellation: &CancellationToken,
    ) -> Result<PreviewImage, FetchError> {
        log::debug!("[THUMBNAIL] Fetching {}", url);

        let bytes = tokio::select! {
            biased;
            _ = cancellation.cancelled() => return Err(FetchError::Cancelled),
            result = self.download(url) => result?,
        };

        let image = Self::decode_off_runtime(bytes).await?;
        log::debug!(
            "[THUMBNAIL] Loaded {}x{} thumbnail from {}",
            image.width,
            image.height,
            url
        );

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::models::preview_image::encode_test_png;

    #[tokio::test]
    async fn test_decode_off_runtime_decodes_png() {
        let image = HttpThumbnailFetcher::decode_off_runtime(encode_test_png(6, 3))
            .await
            .unwrap();

        assert_eq!((image.width, image.height), (6, 3));
    }

    #[tokio::test]
    async fn test_decode_off_runtime_reports_garbage() {
        let error = HttpThumbnailFetcher::decode_off_runtime(b"not an image".to_vec())
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::ImageDecode(_)));
    }

    #[tokio::test]
    async fn test_fetch_thumbnail_cancelled_before_request() {
        let fetcher = HttpThumbnailFetcher::new(reqwest::Client::new());
        let cancellation = CancellationToken::new();
        cancellation.cancel();

        let error = fetcher
            .fetch_thumbnail("https://upload.wikimedia.org/thumb.png", &cancellation)
            .await
            .unwrap_err();

        assert!(error.is_cancelled());
    }
}
