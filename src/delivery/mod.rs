pub mod mail;
pub mod sheets;

use thiserror::Error;

/// Failure from one of the outbound delivery clients.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Delivery transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Delivery endpoint '{url}' is not usable: {reason}")]
    Endpoint { url: String, reason: String },
}
