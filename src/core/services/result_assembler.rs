use std::sync::{Arc, LazyLock};

use regex::Regex;
use tokio_util::sync::CancellationToken;

use crate::core::interfaces::adapters::ThumbnailFetcher;
use crate::core::models::{
    FetchError, ImagePublisher, ImageState, PageRecord, PreviewImage, ScoredResult,
};
use crate::core::services::relevance_scorer;
use crate::global_constants;

/// A freshly assembled result plus, when a thumbnail should be loaded, the
/// half needed to attach it later.
pub struct AssembledResult {
    pub result: Arc<ScoredResult>,
    pub pending_image: Option<PendingImage>,
}

pub struct PendingImage {
    pub url: String,
    pub publisher: ImagePublisher,
}

/// Turns page records into scored results. The text half is built eagerly;
/// the image half is handed back as a [`PendingImage`] for the caller to run
/// in the background.
#[derive(Clone)]
pub struct ResultAssembler {
    placeholder: PreviewImage,
}

impl ResultAssembler {
    pub fn new(placeholder: PreviewImage) -> Self {
        Self { placeholder }
    }

    /// `None` for records that cannot be shown (blank title).
    pub fn assemble(
        &self,
        record: PageRecord,
        searched_text: &str,
        load_images: bool,
    ) -> Option<AssembledResult> {
        if record.title.trim().is_empty() {
            log::debug!(
                "[ASSEMBLER] skipping page {} without a title",
                record.page_id
            );
            return None;
        }

        let score = relevance_scorer::score_title(&record.title, searched_text);
        let description = normalize_extract(&record.extract);
        let image_url = record
            .thumbnail_url
            .clone()
            .filter(|_| load_images);
        let initial_image = if image_url.is_some() {
            ImageState::Pending
        } else {
            ImageState::Unavailable
        };

        log::debug!(
            "[ASSEMBLER] page {} {:?} scored {:.3}",
            record.page_id,
            record.title,
            score
        );

        let (result, publisher) = ScoredResult::new(
            record,
            score,
            searched_text.to_string(),
            description,
            self.placeholder.clone(),
            initial_image,
        );

        Some(AssembledResult {
            result: Arc::new(result),
            pending_image: image_url.map(|url| PendingImage { url, publisher }),
        })
    }
}

impl PendingImage {
    /// Fetches the thumbnail and publishes the outcome into the owning
    /// result. Failures only affect this result.
    pub async fn attach(self, fetcher: Arc<dyn ThumbnailFetcher>, cancellation: CancellationToken) {
        let state = if cancellation.is_cancelled() {
            ImageState::Failed(FetchError::Cancelled)
        } else {
            match fetcher.fetch_thumbnail(&self.url, &cancellation).await {
                Ok(image) => ImageState::Loaded(image),
                Err(error) => {
                    if error.is_cancelled() {
                        log::debug!("[ASSEMBLER] thumbnail fetch cancelled: {}", self.url);
                    } else {
                        log::warn!("[ASSEMBLER] thumbnail {} unavailable: {}", self.url, error);
                    }
                    ImageState::Failed(error)
                }
            }
        };

        self.publisher.publish(state);
    }
}

static LINE_BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid line break regex"));

/// Trims the extract, collapses CR/LF runs into single newlines and
/// substitutes a stock sentence when nothing is left.
pub fn normalize_extract(extract: &str) -> String {
    let trimmed = extract.trim();
    if trimmed.is_empty() {
        return global_constants::MISSING_DESCRIPTION.to_string();
    }

    LINE_BREAK_RUN.replace_all(trimmed, "\n").into_owned()
}
