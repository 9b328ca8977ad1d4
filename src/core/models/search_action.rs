use std::fmt;

use serde::{Deserialize, Serialize};

/// Operations a host can run on a selected result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchAction {
    OpenWikipedia,
    OpenWikiwand,
    SearchGoogle,
    #[default]
    CopyUrl,
}

impl SearchAction {
    pub const ALL: [SearchAction; 4] = [
        SearchAction::OpenWikipedia,
        SearchAction::OpenWikiwand,
        SearchAction::SearchGoogle,
        SearchAction::CopyUrl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchAction::OpenWikipedia => "Open in Wikipedia",
            SearchAction::OpenWikiwand => "Open in Wikiwand",
            SearchAction::SearchGoogle => "Search in Google",
            SearchAction::CopyUrl => "Copy URL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SearchAction::OpenWikipedia => "Opens the article in Wikipedia.",
            SearchAction::OpenWikiwand => "Opens the Wikipedia article with a modern look.",
            SearchAction::SearchGoogle => "Search with Google.",
            SearchAction::CopyUrl => "Copies the article URL to the clipboard.",
        }
    }

    pub fn icon_glyph(&self) -> &'static str {
        match self {
            SearchAction::OpenWikipedia => "\u{E71B}",
            SearchAction::OpenWikiwand => "\u{E774}",
            SearchAction::SearchGoogle => "\u{E721}",
            SearchAction::CopyUrl => "\u{E8C8}",
        }
    }
}

impl fmt::Display for SearchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What the host should do after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleOutcome {
    pub handled: bool,
    pub keep_open: bool,
}

impl HandleOutcome {
    pub fn handled() -> Self {
        Self {
            handled: true,
            keep_open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_action_is_copy_url() {
        assert_eq!(SearchAction::default(), SearchAction::CopyUrl);
    }

    #[test]
    fn test_all_actions_have_distinct_names() {
        let mut names: Vec<&str> = SearchAction::ALL.iter().map(|a| a.name()).collect();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), SearchAction::ALL.len());
    }

    #[test]
    fn test_action_serialization() {
        let serialized = serde_json::to_string(&SearchAction::OpenWikiwand).unwrap();
        assert_eq!(serialized, "\"OpenWikiwand\"");
    }
}
