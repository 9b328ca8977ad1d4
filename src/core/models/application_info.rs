use crate::core::models::SearchAction;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTag {
    pub name: String,
    pub icon_glyph: String,
    pub description: String,
}

/// Registration details a host reads once when loading the provider.
#[derive(Debug, Clone)]
pub struct ApplicationInfo {
    pub name: String,
    pub description: String,
    pub icon_glyph: String,
    pub minimum_search_length: usize,
    pub search_tag_only: bool,
    pub default_search_tags: Vec<SearchTag>,
    pub supported_actions: Vec<SearchAction>,
}

impl Default for ApplicationInfo {
    fn default() -> Self {
        Self {
            name: global_constants::SEARCH_APP_NAME.to_string(),
            description: global_constants::TAG_DESCRIPTION.to_string(),
            icon_glyph: global_constants::SEARCH_RESULT_ICON.to_string(),
            minimum_search_length: global_constants::MINIMUM_SEARCH_LENGTH,
            search_tag_only: true,
            default_search_tags: vec![SearchTag {
                name: global_constants::WIKI_SEARCH_TAG_NAME.to_string(),
                icon_glyph: global_constants::SEARCH_RESULT_ICON.to_string(),
                description: global_constants::TAG_DESCRIPTION.to_string(),
            }],
            supported_actions: SearchAction::ALL.to_vec(),
        }
    }
}

impl ApplicationInfo {
    /// Whether a request carrying `tag` should reach this provider.
    pub fn accepts_tag(&self, tag: Option<&str>) -> bool {
        match tag {
            Some(tag) => self
                .default_search_tags
                .iter()
                .any(|known| known.name.eq_ignore_ascii_case(tag.trim())),
            None => !self.search_tag_only,
        }
    }
}
