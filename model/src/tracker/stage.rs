use serde::Serialize;
use std::fmt;
use std::fmt::Formatter;

/// Stages of an order's lifecycle, in chronological order.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStage {
    Started,
    Oven,
    Rack,
    Route,
    Delivered,
}

impl OrderStage {
    pub const ALL: [OrderStage; 5] = [
        OrderStage::Started,
        OrderStage::Oven,
        OrderStage::Rack,
        OrderStage::Route,
        OrderStage::Delivered,
    ];
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OrderStage::Started => write!(f, "Started"),
            OrderStage::Oven => write!(f, "Oven"),
            OrderStage::Rack => write!(f, "Rack"),
            OrderStage::Route => write!(f, "Route"),
            OrderStage::Delivered => write!(f, "Delivered"),
        }
    }
}
