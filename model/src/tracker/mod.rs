use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

pub use self::stage::OrderStage;

mod stage;

/// Point in time reported by the tracking service, always anchored to the
/// service's fixed timezone.
pub type TrackerTime = DateTime<Tz>;

/// Decoded reply of the order tracking service.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Protocol version reported by the service.
    pub version: String,

    /// Echo of the request the service answered.
    pub query: Query,

    /// Moment the status snapshot was taken. `None` when the service left it empty.
    pub timestamp: Option<TrackerTime>,

    /// Lifecycle entries in the order the service reported them.
    pub statuses: Vec<OrderStatus>,
}

impl Response {
    /// The service answers unknown phone numbers with an envelope that carries no statuses.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub store_id: String,
    pub order_key: String,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStatus {
    pub description: String,
    pub start_time: Option<TrackerTime>,
    pub oven_time: Option<TrackerTime>,
    pub rack_time: Option<TrackerTime>,
    pub route_time: Option<TrackerTime>,
    pub delivery_time: Option<TrackerTime>,
}

impl OrderStatus {
    pub fn stage_time(&self, stage: OrderStage) -> Option<&TrackerTime> {
        match stage {
            OrderStage::Started => self.start_time.as_ref(),
            OrderStage::Oven => self.oven_time.as_ref(),
            OrderStage::Rack => self.rack_time.as_ref(),
            OrderStage::Route => self.route_time.as_ref(),
            OrderStage::Delivered => self.delivery_time.as_ref(),
        }
    }

    /// Furthest stage the order has reached, `None` if no stage has happened yet.
    pub fn latest_stage(&self) -> Option<OrderStage> {
        OrderStage::ALL
            .iter()
            .rev()
            .copied()
            .find(|stage| self.stage_time(*stage).is_some())
    }
}
