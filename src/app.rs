use std::sync::Arc;

use anyhow::Result;

use crate::adapters::{
    ArboardClipboard, HttpThumbnailFetcher, OpenProcessLauncher, WikipediaPageSource,
};
use crate::core::models::{PreviewImage, WikiSettings};
use crate::core::orchestrators::{SearchPipeline, WikiSearchApp};
use crate::core::services::QueryBuilder;
use crate::infrastructure::http_client;

/// Wires the production adapters into a [`WikiSearchApp`]. The placeholder
/// logo is decoded here, once, and shared with every result.
pub fn build_wiki_search_app(settings: WikiSettings) -> Result<WikiSearchApp> {
    log::info!("[APP] Initializing Wikipedia search provider");

    let client = http_client::build_http_client()?;
    let placeholder = PreviewImage::bundled_placeholder()?;

    let pipeline = SearchPipeline::build(
        Arc::new(WikipediaPageSource::new(client.clone())),
        Arc::new(HttpThumbnailFetcher::new(client)),
        QueryBuilder::default(),
        placeholder,
    );

    Ok(WikiSearchApp::build(
        pipeline,
        Arc::new(OpenProcessLauncher::new()),
        Arc::new(ArboardClipboard::new()),
        settings,
    ))
}

pub fn load_settings_or_default() -> WikiSettings {
    WikiSettings::load().unwrap_or_else(|error| {
        log::warn!("[APP] Failed to load settings: {}, using defaults", error);
        WikiSettings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_wiki_search_app_sanitizes_settings() {
        let settings = WikiSettings {
            max_results: 500,
            ..WikiSettings::default()
        };

        let app = build_wiki_search_app(settings).unwrap();

        assert_eq!(app.settings().max_results, 30);
        assert_eq!(app.application_info().name, "WikiPreview");
    }
}
