use std::sync::Arc;

use futures::StreamExt;
use tokio_util::sync::CancellationToken;

use wiki_preview::app;
use wiki_preview::presentation::terminal_view;
use wiki_preview::{ScoredResult, SearchAction, SearchRequest};

const USAGE: &str = "usage: wiki-preview [--open | --wikiwand | --google | --copy] <search text>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting wiki-preview");

    let mut arguments: Vec<String> = std::env::args().skip(1).collect();
    let action = match arguments.first().map(String::as_str) {
        Some("--open") => Some(SearchAction::OpenWikipedia),
        Some("--wikiwand") => Some(SearchAction::OpenWikiwand),
        Some("--google") => Some(SearchAction::SearchGoogle),
        Some("--copy") => Some(SearchAction::CopyUrl),
        _ => None,
    };
    if action.is_some() {
        arguments.remove(0);
    }

    let searched_text = arguments.join(" ");
    if searched_text.trim().is_empty() {
        eprintln!("{}", USAGE);
        return Ok(());
    }

    let settings = app::load_settings_or_default();
    let wiki_app = app::build_wiki_search_app(settings)?;

    let cancellation = CancellationToken::new();
    let mut results: Vec<Arc<ScoredResult>> = wiki_app
        .search(&SearchRequest::tagged(searched_text.as_str()), cancellation)
        .collect()
        .await;

    if results.is_empty() {
        println!("No results for {:?}", searched_text.trim());
        return Ok(());
    }

    results.sort_by(|left, right| right.score.total_cmp(&left.score));
    for result in &results {
        println!("{}", terminal_view::render_result_line(result));
    }

    let top_result = &results[0];
    let image_state = top_result.wait_for_image().await;
    let pane = wiki_app.build_preview(top_result);
    println!();
    println!("{}", terminal_view::render_preview(&pane, &image_state));

    if let Some(action) = action {
        let outcome = wiki_app.handle_selected_action(top_result, Some(action));
        log::info!("[MAIN] {} handled={}", action, outcome.handled);
    }

    Ok(())
}
