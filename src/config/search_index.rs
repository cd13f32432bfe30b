use serde::{ Serialize, Deserialize };
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use log::info;

use crate::config::ContentError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub keywords: Vec<String>,
}

impl SearchRecord {
    /// The lowercased text a query is matched against.
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.keywords.join(" ")).to_lowercase()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchIndexConfig {
    pub records: Vec<SearchRecord>,
    pub suggestions: Vec<String>,
    #[serde(skip)]
    pub last_loaded: Option<SystemTime>,
}

impl SearchIndexConfig {
    fn validate(&self) -> Result<(), ContentError> {
        if self.records.is_empty() {
            return Err(ContentError::EmptyTable("records".to_string()));
        }
        let mut titles = HashSet::new();
        for record in &self.records {
            if !titles.insert(record.title.as_str()) {
                return Err(ContentError::DuplicateTitle(record.title.clone()));
            }
        }
        Ok(())
    }
}

pub fn load_search_index(path: &str) -> Result<Arc<SearchIndexConfig>, Box<dyn Error + Send + Sync>> {
    let file_content = fs
        ::read_to_string(path)
        .map_err(|e| format!("Failed to read search index file '{}': {}", path, e))?;
    let mut config: SearchIndexConfig = serde_json
        ::from_str(&file_content)
        .map_err(|e| format!("Failed to parse search index file '{}': {}", path, e))?;
    config.validate()?;
    config.last_loaded = Some(SystemTime::now());
    Ok(Arc::new(config))
}

pub fn reload_search_index_if_changed<P: AsRef<Path>>(
    path: P,
    current_config: &Arc<SearchIndexConfig>
) -> Result<Option<Arc<SearchIndexConfig>>, ContentError> {
    let metadata = fs::metadata(&path)?;

    if let Ok(modified) = metadata.modified() {
        if let Some(last_loaded) = current_config.last_loaded {
            if modified > last_loaded {
                info!("Search index file changed, reloading...");
                let new_config = load_search_index(path.as_ref().to_str().unwrap()).map_err(|e|
                    ContentError::ReloadError(e.to_string())
                )?;
                return Ok(Some(new_config));
            }
        } else {
            info!("No last_loaded timestamp, reloading search index...");
            let new_config = load_search_index(path.as_ref().to_str().unwrap()).map_err(|e|
                ContentError::ReloadError(e.to_string())
            )?;
            return Ok(Some(new_config));
        }
    }
    Ok(None)
}
