pub mod client;
pub mod config;
pub mod http_transport;

use async_trait::async_trait;

pub use self::client::OrderTracker;
pub use self::config::TrackerConfig;
pub use self::http_transport::HttpTrackerTransport;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("tracker request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("tracker service answered {status} for {url}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("{0:#}")]
    Unknown(anyhow::Error),
}

/// Fetches the raw tracker reply for a phone number.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerTransport: Sync + Send {
    /// Returns the response body exactly as the service sent it. The phone
    /// number is passed through unvalidated.
    async fn fetch(&self, phone_number: &str) -> Result<Vec<u8>, TransportError>;
}
