use anyhow::{anyhow, Context};
use common::config::ConfigLoader;
use order_tracker::config::GlobalConfig;
use order_tracker::logging;
use order_tracker::tracker::{OrderTracker, TrackerConfig};

const APP_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let global_config = ConfigLoader::load_default::<GlobalConfig>()
        .context("Could not load global configuration")?;
    let tracker_config = ConfigLoader::load_default::<TrackerConfig>()
        .context("Could not load tracker configuration")?;

    let _guard = logging::init(APP_NAME, &global_config.log_level)?;

    let phone_number = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: order_status <phone-number>"))?;

    let tracker = OrderTracker::from_config(tracker_config)?;
    let response = tracker.status(&phone_number).await.map_err(|e| {
        if e.is_configuration_fault() {
            tracing::error!(error = ?e, "Order tracker is misconfigured");
        } else {
            tracing::error!(error = ?e, "Order status lookup failed");
        }
        e
    })?;

    if response.is_empty() {
        tracing::warn!("No order found for the given phone number");
    }

    let report = serde_json::to_string_pretty(&response)?;
    println!("{report}");

    Ok(())
}
