pub mod query_builder;
pub mod relevance_scorer;
pub mod result_assembler;

pub use query_builder::{PageLookup, QueryBuilder};
pub use result_assembler::{AssembledResult, PendingImage, ResultAssembler};
