use serde::Deserialize;

pub const DEFAULT_TRACKER_URL: &str = "http://trkweb.dominos.com/orderstorage/GetTrackerData";

#[derive(Deserialize, Clone, Debug)]
pub struct TrackerConfig {
    /// Url of the tracker service's `GetTrackerData` endpoint.
    #[serde(default = "default_tracker_url")]
    pub tracker_url: String,

    /// Upper bound for a whole request, connect included.
    #[serde(default = "default_tracker_request_timeout_secs")]
    pub tracker_request_timeout_secs: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tracker_url: default_tracker_url(),
            tracker_request_timeout_secs: default_tracker_request_timeout_secs(),
        }
    }
}

fn default_tracker_url() -> String {
    DEFAULT_TRACKER_URL.to_owned()
}

fn default_tracker_request_timeout_secs() -> u64 {
    10
}
