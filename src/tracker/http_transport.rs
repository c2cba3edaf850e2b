use super::{TrackerConfig, TrackerTransport, TransportError};
use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

const PHONE_QUERY_PARAM: &str = "Phone";

/// [`TrackerTransport`] issuing `GET <tracker_url>?Phone=<number>` with reqwest.
pub struct HttpTrackerTransport {
    tracker_url: Url,
    http_client: reqwest::Client,
}

impl HttpTrackerTransport {
    pub fn new(config: &TrackerConfig) -> Result<Self, TransportError> {
        let tracker_url = Url::parse(&config.tracker_url).map_err(|e| {
            TransportError::Unknown(
                anyhow!(e).context(format!("Invalid tracker url: {}", config.tracker_url)),
            )
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.tracker_request_timeout_secs))
            .build()?;

        Ok(Self {
            tracker_url,
            http_client,
        })
    }
}

#[async_trait]
impl TrackerTransport for HttpTrackerTransport {
    async fn fetch(&self, phone_number: &str) -> Result<Vec<u8>, TransportError> {
        tracing::debug!(url = %self.tracker_url, "Querying tracker service");

        let response = self
            .http_client
            .get(self.tracker_url.clone())
            .query(&[(PHONE_QUERY_PARAM, phone_number)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::UnexpectedStatus {
                status,
                url: self.tracker_url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::trace!(body = %String::from_utf8_lossy(&body), "Tracker service response");

        Ok(body.to_vec())
    }
}
