use std::collections::HashMap;

use serde::Deserialize;

/// Minimal metadata for one Wikipedia article as returned by the query API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub page_id: u64,
    pub title: String,
    pub extract: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WikiResponse {
    #[serde(default)]
    pub query: Option<WikiQuery>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WikiQuery {
    #[serde(default)]
    pub pages: HashMap<String, WikiPage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WikiPage {
    #[serde(default)]
    pub pageid: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<WikiThumbnail>,
    /// Search rank, only present for generator queries.
    #[serde(default)]
    pub index: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WikiThumbnail {
    pub source: String,
}

impl WikiResponse {
    /// Flattens the id-keyed page map into records ordered by search rank.
    /// Entries without a page id (missing or invalid pages) are dropped.
    pub fn into_page_records(self) -> Vec<PageRecord> {
        let Some(query) = self.query else {
            return Vec::new();
        };

        let mut ranked: Vec<(Option<u32>, PageRecord)> = query
            .pages
            .into_values()
            .filter_map(|page| {
                let page_id = page.pageid?;
                let record = PageRecord {
                    page_id,
                    title: page.title.unwrap_or_default(),
                    extract: page.extract.unwrap_or_default(),
                    thumbnail_url: page
                        .thumbnail
                        .map(|thumbnail| thumbnail.source)
                        .filter(|source| !source.trim().is_empty()),
                };
                Some((page.index, record))
            })
            .collect();

        ranked.sort_by(|(left_index, left), (right_index, right)| {
            left_index
                .unwrap_or(u32::MAX)
                .cmp(&right_index.unwrap_or(u32::MAX))
                .then(left.page_id.cmp(&right.page_id))
        });

        ranked.into_iter().map(|(_, record)| record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESPONSE: &str = r#"{
        "batchcomplete": "",
        "query": {
            "pages": {
                "736": {
                    "pageid": 736,
                    "ns": 0,
                    "title": "Albert Einstein",
                    "index": 1,
                    "thumbnail": {
                        "source": "https://upload.wikimedia.org/einstein.jpg",
                        "width": 100,
                        "height": 130
                    },
                    "extract": "Albert Einstein was a German-born theoretical physicist."
                },
                "9731": {
                    "pageid": 9731,
                    "ns": 0,
                    "title": "Einstein family",
                    "index": 2,
                    "extract": ""
                }
            }
        }
    }"#;

    #[test]
    fn test_parses_generator_response_in_rank_order() {
        let response: WikiResponse = serde_json::from_str(SEARCH_RESPONSE).unwrap();

        let records = response.into_page_records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].page_id, 736);
        assert_eq!(records[0].title, "Albert Einstein");
        assert_eq!(
            records[0].thumbnail_url.as_deref(),
            Some("https://upload.wikimedia.org/einstein.jpg")
        );
        assert_eq!(records[1].page_id, 9731);
        assert!(records[1].thumbnail_url.is_none());
        assert!(records[1].extract.is_empty());
    }

    #[test]
    fn test_response_without_query_has_no_records() {
        let response: WikiResponse = serde_json::from_str(r#"{"batchcomplete": ""}"#).unwrap();

        assert!(response.into_page_records().is_empty());
    }

    #[test]
    fn test_missing_page_is_dropped() {
        let json = r#"{
            "query": {
                "pages": {
                    "-1": { "ns": 0, "title": "Nonexistent article", "missing": "" }
                }
            }
        }"#;
        let response: WikiResponse = serde_json::from_str(json).unwrap();

        assert!(response.into_page_records().is_empty());
    }
}
