use std::fmt;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::core::interfaces::adapters::{ThumbnailFetcher, WikiPageSource};
use crate::core::models::{PageRecord, PreviewImage, ScoredResult, SearchQuery};
use crate::core::services::{PageLookup, QueryBuilder, ResultAssembler};

/// Results in completion order. Ends once every page worker has delivered
/// (or skipped) its result, or as soon as the search is cancelled.
pub type ScoredResultStream = BoxStream<'static, Arc<ScoredResult>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    QueryIssued,
    PagesReceived,
    PerPageProcessing,
    Draining,
    Complete,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "Idle"),
            PipelineState::QueryIssued => write!(f, "QueryIssued"),
            PipelineState::PagesReceived => write!(f, "PagesReceived"),
            PipelineState::PerPageProcessing => write!(f, "PerPageProcessing"),
            PipelineState::Draining => write!(f, "Draining"),
            PipelineState::Complete => write!(f, "Complete"),
        }
    }
}

struct PipelineRun {
    term: String,
    state: PipelineState,
}

impl PipelineRun {
    fn start(term: &str) -> Self {
        Self {
            term: term.to_string(),
            state: PipelineState::Idle,
        }
    }

    fn transition(&mut self, next: PipelineState) {
        log::debug!(
            "[PIPELINE] {:?}: {} -> {}",
            self.term,
            self.state,
            next
        );
        self.state = next;
    }
}

/// Fetch, fan out one worker per page, and funnel scored results through an
/// unbounded queue to a single consumer. Thumbnails are fetched after a
/// result has been delivered and attach themselves in place.
#[derive(Clone)]
pub struct SearchPipeline {
    page_source: Arc<dyn WikiPageSource>,
    thumbnail_fetcher: Arc<dyn ThumbnailFetcher>,
    query_builder: QueryBuilder,
    assembler: ResultAssembler,
}

impl SearchPipeline {
    pub fn build(
        page_source: Arc<dyn WikiPageSource>,
        thumbnail_fetcher: Arc<dyn ThumbnailFetcher>,
        query_builder: QueryBuilder,
        placeholder: PreviewImage,
    ) -> Self {
        Self {
            page_source,
            thumbnail_fetcher,
            query_builder,
            assembler: ResultAssembler::new(placeholder),
        }
    }

    /// Starts a search and returns its result stream. Must be called from
    /// within a Tokio runtime. An empty term yields an empty stream without
    /// issuing any request.
    pub fn search(&self, query: SearchQuery, cancellation: CancellationToken) -> ScoredResultStream {
        let Some(url) = self.query_builder.construct_search_url(&query) else {
            return stream::empty().boxed();
        };

        let (sender, receiver) = mpsc::unbounded_channel();
        let pipeline = self.clone();
        tokio::spawn(pipeline.drive(url, query, sender, cancellation.clone()));

        Self::delivery_stream(receiver, cancellation)
    }

    /// Single-page lookup, scored against the page's own title. The image
    /// loads in the background exactly as for search results.
    pub async fn resolve(
        &self,
        lookup: PageLookup<'_>,
        thumbnail_size: u32,
        load_images: bool,
        cancellation: CancellationToken,
    ) -> Option<Arc<ScoredResult>> {
        let url = self
            .query_builder
            .construct_lookup_url(lookup, thumbnail_size)?;

        let record = self
            .fetch_pages_or_empty(&url, &cancellation)
            .await
            .into_iter()
            .next()?;

        let searched_text = record.title.clone();
        let assembled = self
            .assembler
            .assemble(record, &searched_text, load_images)?;

        if let Some(pending) = assembled.pending_image {
            tokio::spawn(pending.attach(Arc::clone(&self.thumbnail_fetcher), cancellation));
        }

        Some(assembled.result)
    }

    async fn drive(
        self,
        url: String,
        query: SearchQuery,
        sender: mpsc::UnboundedSender<Arc<ScoredResult>>,
        cancellation: CancellationToken,
    ) {
        let mut run = PipelineRun::start(&query.term);

        run.transition(PipelineState::QueryIssued);
        let pages = self.fetch_pages_or_empty(&url, &cancellation).await;

        if pages.is_empty() || cancellation.is_cancelled() {
            log::info!("[PIPELINE] No pages to process for {:?}", query.term);
            run.transition(PipelineState::Complete);
            return;
        }

        run.transition(PipelineState::PagesReceived);
        log::info!(
            "[PIPELINE] Processing {} pages for {:?}",
            pages.len(),
            query.term
        );

        run.transition(PipelineState::PerPageProcessing);
        let mut workers = JoinSet::new();
        for record in pages {
            workers.spawn(Self::process_page(
                self.assembler.clone(),
                Arc::clone(&self.thumbnail_fetcher),
                record,
                query.term.clone(),
                query.load_images,
                sender.clone(),
                cancellation.clone(),
            ));
        }
        drop(sender);

        run.transition(PipelineState::Draining);
        while let Some(joined) = workers.join_next().await {
            if let Err(error) = joined {
                log::error!("[PIPELINE] Page worker failed: {}", error);
            }
        }

        run.transition(PipelineState::Complete);
    }

    async fn process_page(
        assembler: ResultAssembler,
        thumbnail_fetcher: Arc<dyn ThumbnailFetcher>,
        record: PageRecord,
        searched_text: String,
        load_images: bool,
        sender: mpsc::UnboundedSender<Arc<ScoredResult>>,
        cancellation: CancellationToken,
    ) {
        let Some(assembled) = assembler.assemble(record, &searched_text, load_images) else {
            return;
        };

        if cancellation.is_cancelled() {
            return;
        }

        if sender.send(assembled.result).is_err() {
            log::debug!("[PIPELINE] Consumer went away, dropping result");
            return;
        }
        drop(sender);

        if let Some(pending) = assembled.pending_image {
            tokio::spawn(pending.attach(thumbnail_fetcher, cancellation));
        }
    }

    async fn fetch_pages_or_empty(
        &self,
        url: &str,
        cancellation: &CancellationToken,
    ) -> Vec<PageRecord> {
        match self.page_source.fetch_pages(url, cancellation).await {
            Ok(pages) => pages,
            Err(error) if error.is_cancelled() => {
                log::debug!("[PIPELINE] Page fetch cancelled");
                Vec::new()
            }
            Err(error) => {
                log::warn!("[PIPELINE] Page fetch failed, returning no results: {}", error);
                Vec::new()
            }
        }
    }

    fn delivery_stream(
        receiver: mpsc::UnboundedReceiver<Arc<ScoredResult>>,
        cancellation: CancellationToken,
    ) -> ScoredResultStream {
        stream::unfold(
            (receiver, cancellation),
            |(mut receiver, cancellation)| async move {
                tokio::select! {
                    biased;
                    _ = cancellation.cancelled() => None,
                    next = receiver.recv() => {
                        next.map(|result| (result, (receiver, cancellation)))
                    }
                }
            },
        )
        .boxed()
    }
}
