use tokio::sync::watch;

use crate::core::models::{FetchError, PageRecord, PreviewImage};
use crate::global_constants;

/// Thumbnail lifecycle of a delivered result.
#[derive(Debug, Clone)]
pub enum ImageState {
    /// A fetch is in flight; the placeholder is shown meanwhile.
    Pending,
    Loaded(PreviewImage),
    /// No thumbnail on the page, or image loading is disabled.
    Unavailable,
    Failed(FetchError),
}

impl ImageState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ImageState::Pending)
    }
}

/// A page record ranked against the searched text. Text fields are final at
/// construction; the image is attached at most once afterwards through the
/// paired [`ImagePublisher`].
#[derive(Debug)]
pub struct ScoredResult {
    pub record: PageRecord,
    pub score: f64,
    pub searched_text: String,
    pub description: String,
    pub additional_information: Option<String>,
    pub article_path: String,
    placeholder: PreviewImage,
    image: watch::Receiver<ImageState>,
}

/// Write half of a result's image cell. Consumed by `publish`, so a result's
/// image can change at most once after delivery.
#[derive(Debug)]
pub struct ImagePublisher {
    page_id: u64,
    sender: watch::Sender<ImageState>,
}

impl ImagePublisher {
    pub fn publish(self, state: ImageState) {
        log::debug!(
            "[SCORED_RESULT] publishing image state for page {}: {}",
            self.page_id,
            match &state {
                ImageState::Pending => "pending",
                ImageState::Loaded(_) => "loaded",
                ImageState::Unavailable => "unavailable",
                ImageState::Failed(_) => "failed",
            }
        );
        self.sender.send_replace(state);
    }
}

impl ScoredResult {
    pub fn new(
        record: PageRecord,
        score: f64,
        searched_text: String,
        description: String,
        placeholder: PreviewImage,
        initial_image: ImageState,
    ) -> (Self, ImagePublisher) {
        let (sender, receiver) = watch::channel(initial_image);
        let additional_information = description
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string);
        let article_path =
            urlencoding::encode(&record.title.trim().replace(' ', "_")).into_owned();
        let page_id = record.page_id;

        let result = Self {
            record,
            score,
            searched_text,
            description,
            additional_information,
            article_path,
            placeholder,
            image: receiver,
        };

        (result, ImagePublisher { page_id, sender })
    }

    pub fn page_id(&self) -> u64 {
        self.record.page_id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn article_url(&self) -> String {
        format!("{}{}", global_constants::WIKI_ROOT_URL, self.article_path)
    }

    pub fn wikiwand_url(&self) -> String {
        format!("{}{}", global_constants::WIKIWAND_URL, self.article_path)
    }

    pub fn google_search_url(&self) -> String {
        format!(
            "{}{}",
            global_constants::GOOGLE_SEARCH_URL,
            urlencoding::encode(self.record.title.trim())
        )
    }

    pub fn image_state(&self) -> ImageState {
        self.image.borrow().clone()
    }

    pub fn image_loaded(&self) -> bool {
        matches!(*self.image.borrow(), ImageState::Loaded(_))
    }

    pub fn loaded_image(&self) -> Option<PreviewImage> {
        match &*self.image.borrow() {
            ImageState::Loaded(image) => Some(image.clone()),
            _ => None,
        }
    }

    /// The image a consumer should draw right now.
    pub fn display_image(&self) -> PreviewImage {
        self.loaded_image()
            .unwrap_or_else(|| self.placeholder.clone())
    }

    /// Resolves once the image cell leaves `Pending`, or immediately if it
    /// already has. If the publisher is dropped unpublished the current state
    /// is returned as-is.
    pub async fn wait_for_image(&self) -> ImageState {
        let mut receiver = self.image.clone();
        let settled = receiver
            .wait_for(ImageState::is_settled)
            .await
            .map(|state| state.clone());

        match settled {
            Ok(state) => state,
            Err(_) => receiver.borrow().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::preview_image::encode_test_png;

    fn create_record(title: &str) -> PageRecord {
        PageRecord {
            page_id: 42,
            title: title.to_string(),
            extract: String::new(),
            thumbnail_url: None,
        }
    }

    fn create_placeholder() -> PreviewImage {
        PreviewImage::decode(&encode_test_png(8, 8)).unwrap()
    }

    #[test]
    fn test_new_derives_article_path_and_first_line() {
        let (result, _publisher) = ScoredResult::new(
            create_record("Albert Einstein"),
            1.0,
            "einstein".to_string(),
            "First line\nSecond line".to_string(),
            create_placeholder(),
            ImageState::Unavailable,
        );

        assert_eq!(result.article_path, "Albert_Einstein");
        assert_eq!(
            result.article_url(),
            "https://en.wikipedia.org/wiki/Albert_Einstein"
        );
        assert_eq!(result.additional_information.as_deref(), Some("First line"));
    }

    #[test]
    fn test_article_urls_encode_reserved_characters() {
        let (result, _publisher) = ScoredResult::new(
            create_record("Why? (film)"),
            0.5,
            "why".to_string(),
            "text".to_string(),
            create_placeholder(),
            ImageState::Unavailable,
        );

        assert_eq!(result.article_path, "Why%3F_%28film%29");
        assert_eq!(
            result.article_url(),
            "https://en.wikipedia.org/wiki/Why%3F_%28film%29"
        );
        assert_eq!(
            result.wikiwand_url(),
            "https://www.wikiwand.com/en/Why%3F_%28film%29"
        );
        assert_eq!(
            result.google_search_url(),
            "https://www.google.com/search?q=Why%3F%20%28film%29"
        );
    }

    #[test]
    fn test_display_image_falls_back_to_placeholder() {
        let placeholder = create_placeholder();
        let (result, _publisher) = ScoredResult::new(
            create_record("Rust"),
            0.5,
            "rust".to_string(),
            "text".to_string(),
            placeholder.clone(),
            ImageState::Pending,
        );

        assert!(!result.image_loaded());
        assert!(result.display_image().same_image(&placeholder));
    }

    #[tokio::test]
    async fn test_published_image_is_visible_to_waiting_reader() {
        let placeholder = create_placeholder();
        let (result, publisher) = ScoredResult::new(
            create_record("Rust"),
            0.5,
            "rust".to_string(),
            "text".to_string(),
            placeholder.clone(),
            ImageState::Pending,
        );
        let thumbnail = PreviewImage::decode(&encode_test_png(16, 16)).unwrap();
        let published = thumbnail.clone();

        let writer = tokio::spawn(async move {
            publisher.publish(ImageState::Loaded(published));
        });

        let state = result.wait_for_image().await;
        writer.await.unwrap();

        assert!(matches!(state, ImageState::Loaded(_)));
        assert!(result.image_loaded());
        assert!(result.display_image().same_image(&thumbnail));
    }

    #[tokio::test]
    async fn test_dropped_publisher_leaves_state_pending() {
        let (result, publisher) = ScoredResult::new(
            create_record("Rust"),
            0.5,
            "rust".to_string(),
            "text".to_string(),
            create_placeholder(),
            ImageState::Pending,
        );

        drop(publisher);

        assert!(matches!(result.wait_for_image().await, ImageState::Pending));
    }
}
