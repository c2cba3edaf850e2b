use super::{HttpTrackerTransport, TrackerConfig, TrackerTransport};
use crate::decoder::decode_envelope;
use crate::result::error::Result;
use model::tracker::Response;

/// Looks up the status of an order by the phone number it was placed with.
pub struct OrderTracker<T: TrackerTransport> {
    transport: T,
}

impl OrderTracker<HttpTrackerTransport> {
    pub fn from_config(config: TrackerConfig) -> Result<Self> {
        Ok(Self::new(HttpTrackerTransport::new(&config)?))
    }
}

impl<T: TrackerTransport> OrderTracker<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetches and decodes the tracker reply for `phone_number`.
    ///
    /// The number is not validated here; the service answers unknown numbers
    /// with an envelope that decodes to a [`Response`] without statuses.
    pub async fn status(&self, phone_number: &str) -> Result<Response> {
        let body = self.transport.fetch(phone_number).await?;
        Ok(decode_envelope(&body)?)
    }
}
