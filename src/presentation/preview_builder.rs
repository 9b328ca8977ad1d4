use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use crate::core::models::{
    PreviewButton, PreviewCommand, PreviewImageBox, PreviewPane, ScoredResult,
};
use crate::global_constants;

/// Builds preview panes for Wikipedia results. Image boxes are bounded by
/// the configured image size.
#[derive(Debug, Clone)]
pub struct PreviewBuilder {
    max_image_size: u32,
}

impl PreviewBuilder {
    pub fn new(max_image_size: u32) -> Self {
        Self { max_image_size }
    }

    pub fn build(&self, result: &ScoredResult) -> PreviewPane {
        let text = double_line_breaks(&result.description);
        let image = result.display_image();
        let (width, height) = image.fitted_size(self.max_image_size);

        log::debug!(
            "[PREVIEW] building preview for page {} (image {}x{}, loaded={})",
            result.page_id(),
            width,
            height,
            result.image_loaded()
        );

        let buttons = vec![
            PreviewButton {
                label: global_constants::PREVIEW_BUTTON_WIKIPEDIA.to_string(),
                command: PreviewCommand::OpenUrl(result.article_url()),
            },
            PreviewButton {
                label: global_constants::PREVIEW_BUTTON_GOOGLE.to_string(),
                command: PreviewCommand::OpenUrl(result.google_search_url()),
            },
            PreviewButton {
                label: global_constants::PREVIEW_BUTTON_COPY.to_string(),
                command: PreviewCommand::CopyText(text.clone()),
            },
        ];

        PreviewPane {
            title: result.title().to_string(),
            image: Some(PreviewImageBox {
                image,
                width,
                height,
                max_size: self.max_image_size,
            }),
            text,
            buttons,
        }
    }
}

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?|\n").expect("valid line break regex"));

/// Every line break becomes a blank line, which reads better in a narrow pane.
pub fn double_line_breaks(text: &str) -> String {
    LINE_BREAK.replace_all(text, "\n\n").into_owned()
}

/// True for `https://<lang>.wikipedia.org/wiki/<Title>` without a fragment.
pub fn is_wikipedia_article_url(context: &str) -> bool {
    let Ok(url) = Url::parse(context.trim()) else {
        return false;
    };

    if url.scheme() != "https" || url.fragment().is_some() {
        return false;
    }

    let Some(host) = url.host_str() else {
        return false;
    };
    let Some((_, domain)) = host.split_once('.') else {
        return false;
    };
    if domain != global_constants::WIKIPEDIA_HOST_SUFFIX {
        return false;
    }

    let Some(segments) = url.path_segments() else {
        return false;
    };
    let segments: Vec<&str> = segments.filter(|segment| !segment.is_empty()).collect();
    matches!(segments.as_slice(), ["wiki", _])
}

/// Article title encoded in the last path segment of a Wikipedia URL.
pub fn article_title_from_url(context: &str) -> Option<String> {
    let url = Url::parse(context.trim()).ok()?;
    let segment = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?
        .to_string();

    let title = urlencoding::decode(&segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(segment)
        .replace('_', " ");

    if title.trim().is_empty() {
        None
    } else {
        Some(title)
    }
}
