pub mod adapters;
pub mod app;
pub mod core;
pub mod global_constants;
pub mod infrastructure;
pub mod presentation;

pub use crate::core::models::{
    FetchError, ImageState, PageRecord, PreviewPane, ScoredResult, SearchAction, SearchQuery,
    WikiSettings,
};
pub use crate::core::orchestrators::{ScoredResultStream, SearchRequest, WikiSearchApp};
