use crate::core::models::SearchQuery;
use crate::global_constants;

/// Single-page lookup modes of the query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLookup<'a> {
    ById(u64),
    ByTitle(&'a str),
}

/// Builds query API URLs. Pure string construction; nothing here touches the
/// network.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    api_url: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(global_constants::WIKI_API_URL.to_string())
    }
}

impl QueryBuilder {
    pub fn new(api_url: String) -> Self {
        Self { api_url }
    }

    /// `None` for an empty term: the caller must not issue a request.
    pub fn construct_search_url(&self, query: &SearchQuery) -> Option<String> {
        if query.is_empty() {
            log::debug!("[QUERY_BUILDER] empty search term, no URL built");
            return None;
        }

        let url = format!(
            "{}?action=query&format=json&generator=search&gsrsearch={}&gsrnamespace={}&gsrlimit={}\
             &prop=pageimages|extracts&exintro&explaintext&exlimit=max&pilicense=any&pithumbsize={}",
            self.api_url,
            urlencoding::encode(query.term.trim()),
            query.namespace,
            query.result_limit,
            query.thumbnail_size
        );

        log::debug!("[QUERY_BUILDER] search URL: {}", url);
        Some(url)
    }

    pub fn construct_lookup_url(&self, lookup: PageLookup<'_>, thumbnail_size: u32) -> Option<String> {
        let selector = match lookup {
            PageLookup::ById(page_id) => format!("pageids={}", page_id),
            PageLookup::ByTitle(title) => {
                let title = title.trim();
                if title.is_empty() {
                    log::debug!("[QUERY_BUILDER] empty lookup title, no URL built");
                    return None;
                }
                format!("titles={}", urlencoding::encode(title))
            }
        };

        let url = format!(
            "{}?action=query&format=json&prop=extracts|pageimages&{}\
             &explaintext&exintro&pilicense=any&pithumbsize={}",
            self.api_url, selector, thumbnail_size
        );

        log::debug!("[QUERY_BUILDER] lookup URL: {}", url);
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_query(term: &str) -> SearchQuery {
        SearchQuery {
            term: term.to_string(),
            namespace: 0,
            result_limit: 8,
            thumbnail_size: 100,
            load_images: true,
        }
    }

    #[test]
    fn test_construct_search_url_contains_generator_parameters() {
        let builder = QueryBuilder::default();

        let url = builder
            .construct_search_url(&create_query("Albert Einstein"))
            .unwrap();
        let decoded = urlencoding::decode(&url).unwrap();

        assert!(url.starts_with("https://en.wikipedia.org/w/api.php?action=query"));
        assert!(decoded.contains("gsrsearch=Albert Einstein&gsrnamespace=0&gsrlimit=8"));
        assert!(url.contains("generator=search"));
        assert!(url.contains("prop=pageimages|extracts"));
        assert!(url.contains("&exintro&explaintext"));
        assert!(url.contains("pithumbsize=100"));
        assert!(url.contains("format=json"));
    }

    #[test]
    fn test_construct_search_url_encodes_term() {
        let builder = QueryBuilder::default();

        let url = builder
            .construct_search_url(&create_query("C&A 100%"))
            .unwrap();

        assert!(url.contains("gsrsearch=C%26A%20100%25&"));
    }

    #[test]
    fn test_construct_search_url_empty_term_is_none() {
        let builder = QueryBuilder::default();

        assert!(builder.construct_search_url(&create_query("")).is_none());
        assert!(builder.construct_search_url(&create_query("   ")).is_none());
    }

    #[test]
    fn test_construct_lookup_url_by_id() {
        let builder = QueryBuilder::new("https://wiki.test/api.php".to_string());

        let url = builder
            .construct_lookup_url(PageLookup::ById(736), 120)
            .unwrap();

        assert!(url.starts_with("https://wiki.test/api.php?"));
        assert!(url.contains("&pageids=736&"));
        assert!(url.contains("pithumbsize=120"));
        assert!(!url.contains("generator=search"));
    }

    #[test]
    fn test_construct_lookup_url_by_title() {
        let builder = QueryBuilder::default();

        let url = builder
            .construct_lookup_url(PageLookup::ByTitle("Albert Einstein"), 100)
            .unwrap();

        assert!(url.contains("&titles=Albert%20Einstein&"));
        assert!(builder
            .construct_lookup_url(PageLookup::ByTitle(" "), 100)
            .is_none());
    }
}
