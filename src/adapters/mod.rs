mod arboard_clipboard;
mod http_thumbnail_fetcher;
mod open_process_launcher;
pub mod wikipedia_page_source;

pub use arboard_clipboard::ArboardClipboard;
pub use http_thumbnail_fetcher::HttpThumbnailFetcher;
pub use open_process_launcher::OpenProcessLauncher;
pub use wikipedia_page_source::WikipediaPageSource;
