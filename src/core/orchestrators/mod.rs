pub mod search_pipeline;
pub mod wiki_search_app;

pub use search_pipeline::{PipelineState, ScoredResultStream, SearchPipeline};
pub use wiki_search_app::{SearchRequest, WikiSearchApp};
