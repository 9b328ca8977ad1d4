mod page_source;
mod thumbnail_fetcher;

pub use page_source::WikiPageSource;
pub use thumbnail_fetcher::ThumbnailFetcher;
