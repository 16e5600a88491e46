//! Signal HTTP client.

use crate::error::SignalError;
use crate::types::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Signal CLI REST API client bound to one bot account.
#[derive(Clone)]
pub struct SignalClient {
    http: Client,
    base_url: String,
    number: String,
    /// `number`, percent-encoded for use in URL paths.
    number_path: String,
}

impl SignalClient {
    pub fn new(base_url: impl Into<String>, number: impl Into<String>) -> Result<Self, SignalError> {
        let number = number.into();

        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            number_path: encode(&number).into_owned(),
            number,
        })
    }

    /// Whether the REST API answers its health endpoint.
    pub async fn health_check(&self) -> bool {
        match self.http.get(self.url("/v1/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check failed: {}", e);
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self) -> Result<Account, SignalError> {
        let path = format!("/v1/accounts/{}", self.number_path);
        self.get_json("accounts", &path).await
    }

    /// Fetch and acknowledge every pending envelope.
    #[instrument(skip(self))]
    pub async fn receive(&self) -> Result<Vec<IncomingMessage>, SignalError> {
        let path = format!("/v1/receive/{}", self.number_path);
        let batch: Vec<IncomingMessage> = self.get_json("receive", &path).await?;

        if !batch.is_empty() {
            debug!("Received {} envelopes", batch.len());
        }
        Ok(batch)
    }

    /// Send a text message to a phone number or group id.
    #[instrument(skip(self, message), fields(len = message.len()))]
    pub async fn send(&self, recipient: &str, message: &str) -> Result<(), SignalError> {
        self.post_send(SendMessageRequest::text(&self.number, recipient, message))
            .await
    }

    /// Send `data` as a single attachment named `filename`.
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn send_attachment(
        &self,
        recipient: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<(), SignalError> {
        let request = SendMessageRequest::text(&self.number, recipient, "")
            .with_attachment(attachment_data_uri(filename, data));
        self.post_send(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
    ) -> Result<T, SignalError> {
        let response = self.http.get(self.url(path)).send().await?;
        Ok(check_status(endpoint, response).await?.json().await?)
    }

    async fn post_send(&self, request: SendMessageRequest<'_>) -> Result<(), SignalError> {
        let response = self
            .http
            .post(self.url("/v2/send"))
            .json(&request)
            .send()
            .await?;

        check_status("send", response).await?;
        debug!("Delivered to {}", request.recipients[0]);
        Ok(())
    }
}

async fn check_status(endpoint: &'static str, response: Response) -> Result<Response, SignalError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Signal API {} returned {}: {}", endpoint, status, body);
    Err(SignalError::Api {
        endpoint,
        status: status.as_u16(),
        body,
    })
}

/// Encode an attachment the way the REST API expects it:
/// `data:<mime>;filename=<name>;base64,<data>`.
pub fn attachment_data_uri(filename: &str, data: &[u8]) -> String {
    format!(
        "data:{};filename={};base64,{}",
        mime_type(filename),
        filename,
        STANDARD.encode(data)
    )
}

fn mime_type(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "json" => "application/json",
        Some(ext) if ext == "csv" => "text/csv",
        Some(ext) if ext == "txt" || ext == "log" || ext == "md" => "text/plain",
        _ => "application/octet-stream",
    }
}
