use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::core::interfaces::ports::{ClipboardPort, ProcessLauncher};
use crate::core::models::{
    ApplicationInfo, HandleOutcome, PreviewCommand, PreviewPane, ScoredResult, SearchAction,
    SearchQuery, WikiSettings,
};
use crate::core::orchestrators::search_pipeline::{ScoredResultStream, SearchPipeline};
use crate::core::services::PageLookup;
use crate::global_constants;
use crate::presentation::preview_builder::{self, PreviewBuilder};

/// A search request as a host hands it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub searched_text: String,
    pub search_tag: Option<String>,
}

impl SearchRequest {
    pub fn new(searched_text: impl Into<String>, search_tag: Option<String>) -> Self {
        Self {
            searched_text: searched_text.into(),
            search_tag,
        }
    }

    /// A request carrying this provider's own tag.
    pub fn tagged(searched_text: impl Into<String>) -> Self {
        Self::new(
            searched_text,
            Some(global_constants::WIKI_SEARCH_TAG_NAME.to_string()),
        )
    }
}

/// The capabilities a launcher host consumes: search, resolve by id, build
/// previews and run actions. Host utilities are reached only through the
/// injected ports.
pub struct WikiSearchApp {
    application_info: ApplicationInfo,
    settings: WikiSettings,
    pipeline: SearchPipeline,
    preview_builder: PreviewBuilder,
    process_launcher: Arc<dyn ProcessLauncher>,
    clipboard: Arc<dyn ClipboardPort>,
}

impl WikiSearchApp {
    pub fn build(
        pipeline: SearchPipeline,
        process_launcher: Arc<dyn ProcessLauncher>,
        clipboard: Arc<dyn ClipboardPort>,
        settings: WikiSettings,
    ) -> Self {
        let settings = settings.sanitized();
        log::info!(
            "[WIKI_APP] Building search app (max_results={}, load_images={})",
            settings.max_results,
            settings.load_images
        );

        Self {
            application_info: ApplicationInfo::default(),
            preview_builder: PreviewBuilder::new(settings.image_size),
            settings,
            pipeline,
            process_launcher,
            clipboard,
        }
    }

    pub fn application_info(&self) -> &ApplicationInfo {
        &self.application_info
    }

    pub fn settings(&self) -> &WikiSettings {
        &self.settings
    }

    pub fn search(&self, request: &SearchRequest, cancellation: CancellationToken) -> ScoredResultStream {
        if !self
            .application_info
            .accepts_tag(request.search_tag.as_deref())
        {
            log::debug!(
                "[WIKI_APP] Ignoring request with tag {:?}",
                request.search_tag
            );
            return stream::empty().boxed();
        }

        let searched_text = request.searched_text.trim();
        if searched_text.chars().count() < self.application_info.minimum_search_length {
            log::debug!("[WIKI_APP] Search text {:?} below minimum length", searched_text);
            return stream::empty().boxed();
        }

        log::info!("[WIKI_APP] Searching Wikipedia for {:?}", searched_text);
        let query = SearchQuery::from_settings(searched_text, &self.settings);
        self.pipeline.search(query, cancellation)
    }

    pub async fn resolve_by_id(&self, page_id: &str) -> Option<Arc<ScoredResult>> {
        let page_id = match page_id.trim().parse::<u64>() {
            Ok(page_id) => page_id,
            Err(_) => {
                log::warn!("[WIKI_APP] Invalid page id {:?}", page_id);
                return None;
            }
        };

        self.resolve(PageLookup::ById(page_id)).await
    }

    pub async fn resolve_by_title(&self, title: &str) -> Option<Arc<ScoredResult>> {
        self.resolve(PageLookup::ByTitle(title)).await
    }

    async fn resolve(&self, lookup: PageLookup<'_>) -> Option<Arc<ScoredResult>> {
        log::info!("[WIKI_APP] Resolving {:?}", lookup);
        self.pipeline
            .resolve(
                lookup,
                self.settings.image_size,
                self.settings.load_images,
                CancellationToken::new(),
            )
            .await
    }

    /// Previews are offered for this provider's results and for any result
    /// whose context is a Wikipedia article URL.
    pub fn can_build_preview_for(&self, search_app: Option<&str>, context: Option<&str>) -> bool {
        if search_app
            .map(|name| name.eq_ignore_ascii_case(&self.application_info.name))
            .unwrap_or(false)
        {
            return true;
        }

        context
            .map(preview_builder::is_wikipedia_article_url)
            .unwrap_or(false)
    }

    pub fn build_preview(&self, result: &ScoredResult) -> PreviewPane {
        self.preview_builder.build(result)
    }

    /// Preview for a foreign result that points at a Wikipedia article.
    pub async fn build_preview_for_url(&self, context: &str) -> Option<PreviewPane> {
        if !preview_builder::is_wikipedia_article_url(context) {
            return None;
        }

        let title = preview_builder::article_title_from_url(context)?;
        let result = self.resolve_by_title(&title).await?;
        Some(self.build_preview(&result))
    }

    /// Runs `action` (or the default copy-URL action) on a selected result.
    pub fn handle_selected_action(
        &self,
        result: &ScoredResult,
        action: Option<SearchAction>,
    ) -> HandleOutcome {
        if result.title().trim().is_empty() {
            return HandleOutcome::handled();
        }

        let action = action.unwrap_or_default();
        log::info!(
            "[WIKI_APP] Running {:?} on page {}",
            action,
            result.page_id()
        );

        match action {
            SearchAction::OpenWikipedia => self.open_url(&result.article_url()),
            SearchAction::OpenWikiwand => self.open_url(&result.wikiwand_url()),
            SearchAction::SearchGoogle => self.open_url(&result.google_search_url()),
            SearchAction::CopyUrl => self.copy_text(&result.article_url()),
        }

        HandleOutcome::handled()
    }

    pub fn run_preview_command(&self, command: &PreviewCommand) {
        match command {
            PreviewCommand::OpenUrl(url) if !url.trim().is_empty() => self.open_url(url),
            PreviewCommand::CopyText(text) if !text.trim().is_empty() => self.copy_text(text),
            _ => log::debug!("[WIKI_APP] Ignoring empty preview command"),
        }
    }

    fn open_url(&self, url: &str) {
        if let Err(error) = self.process_launcher.open_url(url) {
            log::error!("[WIKI_APP] Failed to open {}: {}", url, error);
        }
    }

    fn copy_text(&self, text: &str) {
        if let Err(error) = self.clipboard.copy_text(text) {
            log::error!("[WIKI_APP] Failed to copy to clipboard: {}", error);
        }
    }
}
