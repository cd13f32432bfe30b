use log::info;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE } };
use serde::Serialize;

use crate::delivery::DispatchError;
use crate::models::contact::DispatchRecord;

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Client for the transactional mail API the contact form submits through.
/// The form record rides along as `template_params`.
#[derive(Clone)]
pub struct MailClient {
    http: HttpClient,
    base_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a DispatchRecord,
}

impl MailClient {
    pub fn new(
        base_url: &str,
        service_id: &str,
        template_id: &str,
        public_key: &str
    ) -> Result<Self, DispatchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        })
    }

    /// Sends one submission. Any non-2xx status is a dispatch error.
    pub async fn send(&self, record: &DispatchRecord) -> Result<(), DispatchError> {
        let url = format!("{}{}", self.base_url, SEND_PATH);
        let req = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: record,
        };

        self.http
            .post(&url)
            .json(&req)
            .send().await?
            .error_for_status()?;

        info!("Mail dispatch accepted for submission from {}", record.email);
        Ok(())
    }
}
