pub mod responses;
pub mod search_index;

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ContentError {
    MissingEntry(String),
    UnknownTrigger(String),
    DuplicateTitle(String),
    EmptyTable(String),
    ReloadError(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingEntry(key) => {
                write!(f, "Required content entry '{}' is missing or empty", key)
            }
            ContentError::UnknownTrigger(keyword) => {
                write!(f, "Keyword rule '{}' references no known canned trigger", keyword)
            }
            ContentError::DuplicateTitle(title) => {
                write!(f, "Duplicate search record title '{}'", title)
            }
            ContentError::EmptyTable(name) => write!(f, "Content table '{}' is empty", name),
            ContentError::ReloadError(msg) => write!(f, "Content reload error: {}", msg),
            ContentError::IoError(e) => write!(f, "Content file IO error: {}", e),
            ContentError::JsonError(e) => write!(f, "Content JSON parsing error: {}", e),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ContentError::IoError(e) => Some(e),
            ContentError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ContentError {
    fn from(err: std::io::Error) -> Self {
        ContentError::IoError(err)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::JsonError(err)
    }
}
