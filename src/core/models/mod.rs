mod application_info;
mod fetch_error;
mod page_record;
pub(crate) mod preview_image;
mod preview_pane;
mod scored_result;
mod search_action;
mod search_query;
mod user_settings;

pub use application_info::{ApplicationInfo, SearchTag};
pub use fetch_error::FetchError;
pub use page_record::{PageRecord, WikiPage, WikiQuery, WikiResponse, WikiThumbnail};
pub use preview_image::PreviewImage;
pub use preview_pane::{PreviewButton, PreviewCommand, PreviewImageBox, PreviewPane};
pub use scored_result::{ImagePublisher, ImageState, ScoredResult};
pub use search_action::{HandleOutcome, SearchAction};
pub use search_query::SearchQuery;
pub use user_settings::WikiSettings;
