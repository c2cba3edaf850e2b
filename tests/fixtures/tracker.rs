use order_tracker::tracker::{HttpTrackerTransport, OrderTracker, TrackerConfig};
use rstest::fixture;
use wiremock::MockServer;

pub const TRACKER_PATH: &str = "/orderstorage/GetTrackerData";

pub struct TrackerFixture {
    pub mock_server: MockServer,
    pub tracker: OrderTracker<HttpTrackerTransport>,
}

#[fixture]
pub async fn tracker_fixture() -> TrackerFixture {
    let mock_server = MockServer::start().await;
    let config = TrackerConfig {
        tracker_url: format!("{}{TRACKER_PATH}", mock_server.uri()),
        tracker_request_timeout_secs: 1,
    };
    let tracker = OrderTracker::from_config(config).unwrap();

    TrackerFixture {
        mock_server,
        tracker,
    }
}
