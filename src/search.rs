use std::sync::Arc;

use serde::Serialize;

use crate::config::search_index::{ SearchIndexConfig, SearchRecord };

/// What the search modal shows for a given query.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SearchView {
    Suggestions {
        suggestions: Vec<String>,
    },
    Results {
        count_label: String,
        items: Vec<SearchRecord>,
    },
    NoResults {
        query: String,
    },
}

/// Substring matcher over the static record list. Matches preserve record
/// order; there is no ranking.
pub struct SearchIndex {
    config: Arc<SearchIndexConfig>,
}

impl SearchIndex {
    pub fn new(config: Arc<SearchIndexConfig>) -> Self {
        Self { config }
    }

    pub fn set_config(&mut self, config: Arc<SearchIndexConfig>) {
        self.config = config;
    }

    /// Runs one query. Only the emptiness check looks at the trimmed text;
    /// the match itself uses the raw query, spaces included.
    pub fn query(&self, raw: &str) -> SearchView {
        if raw.trim().is_empty() {
            return SearchView::Suggestions {
                suggestions: self.config.suggestions.clone(),
            };
        }

        let needle = raw.to_lowercase();
        let items: Vec<SearchRecord> = self.config.records
            .iter()
            .filter(|record| record.haystack().contains(&needle))
            .cloned()
            .collect();

        if items.is_empty() {
            return SearchView::NoResults {
                query: raw.to_string(),
            };
        }

        let count_label = if items.len() == 1 {
            "1 result".to_string()
        } else {
            format!("{} results", items.len())
        };

        SearchView::Results { count_label, items }
    }
}
