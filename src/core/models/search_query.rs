use crate::core::models::WikiSettings;

/// One search invocation's parameters. Built per keystroke and discarded
/// once its result stream is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub namespace: i32,
    pub result_limit: u32,
    pub thumbnail_size: u32,
    pub load_images: bool,
}

impl SearchQuery {
    pub fn from_settings(term: &str, settings: &WikiSettings) -> Self {
        let query = Self {
            term: term.trim().to_string(),
            namespace: settings.namespace,
            result_limit: settings.max_results,
            thumbnail_size: settings.image_size,
            load_images: settings.load_images,
        };

        log::debug!(
            "[SEARCH_QUERY] term={:?}, namespace={}, limit={}, thumbnail={}, images={}",
            query.term,
            query.namespace,
            query.result_limit,
            query.thumbnail_size,
            query.load_images
        );

        query
    }

    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_trims_term_and_copies_settings() {
        let settings = WikiSettings {
            max_results: 12,
            load_images: false,
            image_size: 150,
            namespace: 4,
        };

        let query = SearchQuery::from_settings("  Rust language \n", &settings);

        assert_eq!(query.term, "Rust language");
        assert_eq!(query.result_limit, 12);
        assert_eq!(query.thumbnail_size, 150);
        assert_eq!(query.namespace, 4);
        assert!(!query.load_images);
    }

    #[test]
    fn test_whitespace_term_is_empty() {
        let query = SearchQuery::from_settings("   ", &WikiSettings::default());

        assert!(query.is_empty());
    }
}
