use log::debug;
use reqwest::Client as HttpClient;
use url::Url;

use crate::delivery::DispatchError;
use crate::models::contact::DispatchRecord;

/// Mirrors each submission to a spreadsheet webhook as a flat JSON row.
/// The webhook's response body is never interpreted.
#[derive(Clone)]
pub struct SheetMirror {
    http: HttpClient,
    webhook_url: String,
}

impl SheetMirror {
    pub fn new(webhook_url: &str) -> Result<Self, DispatchError> {
        Url::parse(webhook_url).map_err(|e| DispatchError::Endpoint {
            url: webhook_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            http: HttpClient::new(),
            webhook_url: webhook_url.to_string(),
        })
    }

    pub async fn append(&self, record: &DispatchRecord) -> Result<(), DispatchError> {
        self.http
            .post(&self.webhook_url)
            .json(record)
            .send().await?
            .error_for_status()?;

        debug!("Submission mirrored to spreadsheet webhook");
        Ok(())
    }
}
