pub mod preview_builder;
pub mod terminal_view;

pub use preview_builder::PreviewBuilder;
