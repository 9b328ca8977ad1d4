use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::core::interfaces::adapters::WikiPageSource;
use crate::core::models::{FetchError, PageRecord, WikiResponse};

pub struct WikipediaPageSource {
    client: reqwest::Client,
}

impl WikipediaPageSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn request_pages(&self, url: &str) -> Result<Vec<PageRecord>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        log::debug!("[WIKI_API] Received {} bytes", body.len());
        parse_pages(&body)
    }
}

pub fn parse_pages(body: &[u8]) -> Result<Vec<PageRecord>, FetchError> {
    let response: WikiResponse = serde_json::from_slice(body)?;
    Ok(response.into_page_records())
}

#[async_trait]
impl WikiPageSource for WikipediaPageSource {
    async fn fetch_pages(
        &self,
        url: &str,
        cancellation: &CancellationToken,
    ) -> Result<Vec<PageRecord>, FetchError> {
        log::info!("[WIKI_API] Querying Wikipedia");
        log::debug!("[WIKI_API] URL: {}", url);

        let records = tokio::select! {
            biased;
            _ = cancellation.cancelled() => return Err(FetchError::Cancelled),
            result = self.request_pages(url) => result?,
        };

        log::info!("[WIKI_API] Query returned {} pages", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pages_reads_search_response() {
        let body = br#"{
            "query": {
                "pages": {
                    "26": { "pageid": 26, "title": "Rust", "index": 2, "extract": "Iron oxide." },
                    "25": {
                        "pageid": 25,
                        "title": "Rust (programming language)",
                        "index": 1,
                        "extract": "A language.",
                        "thumbnail": { "source": "https://upload.test/rust.png" }
                    }
                }
            }
        }"#;

        let records = parse_pages(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Rust (programming language)");
        assert_eq!(
            records[0].thumbnail_url.as_deref(),
            Some("https://upload.test/rust.png")
        );
        assert_eq!(records[1].extract, "Iron oxide.");
    }

    #[test]
    fn test_parse_pages_rejects_malformed_json() {
        let error = parse_pages(b"<html>rate limited</html>").unwrap_err();

        assert!(matches!(error, FetchError::Deserialization(_)));
    }

    #[test]
    fn test_parse_pages_without_matches_is_empty() {
        let records = parse_pages(br#"{"batchcomplete":""}"#).unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_pages_cancelled_before_request() {
        let source = WikipediaPageSource::new(reqwest::Client::new());
        let cancellation = CancellationToken::new();
        cancellation.cancel();

        let error = source
            .fetch_pages("https://en.wikipedia.org/w/api.php", &cancellation)
            .await
            .unwrap_err();

        assert_eq!(error, FetchError::Cancelled);
    }
}
