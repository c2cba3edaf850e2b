//! Tracker service payloads used ONLY in unit and integration testing.

pub const SAMPLE_STORE_ID: &str = "6228";
pub const SAMPLE_ORDER_KEY: &str = "622834370420";
pub const SAMPLE_AS_OF: &str = "2012-10-02T02:57:08";
pub const SAMPLE_PHONE_NUMBER: &str = "5551234567";

/// Reply captured from the service for an order with no reported statuses.
pub const SAMPLE_ENVELOPE: &str = r#"
    <soap:Envelope>
        <soap:Body>
            <GetTrackerDataResponse>
                <Version>1.5</Version>
                <Query>
                    <StoreID>6228</StoreID>
                    <OrderKey>622834370420</OrderKey>
                </Query>
                <AsOf>2012-10-02T02:57:08</AsOf>
                <OrderStatuses/>
            </GetTrackerDataResponse>
        </soap:Body>
    </soap:Envelope>
"#;

/// Timestamps of a single `OrderStatus` entry, in wire order. Empty strings
/// render as empty elements.
#[derive(Clone, Debug, Default)]
pub struct StatusTimes<'a> {
    pub start: &'a str,
    pub oven: &'a str,
    pub rack: &'a str,
    pub route: &'a str,
    pub delivery: &'a str,
}

pub fn order_status_xml(description: &str, times: &StatusTimes<'_>) -> String {
    format!(
        "<OrderStatus>\
            <OrderDescription>{description}</OrderDescription>\
            <StartTime>{}</StartTime>\
            <OvenTime>{}</OvenTime>\
            <RackTime>{}</RackTime>\
            <RouteTime>{}</RouteTime>\
            <DeliveryTime>{}</DeliveryTime>\
        </OrderStatus>",
        times.start, times.oven, times.rack, times.route, times.delivery
    )
}

/// Full SOAP envelope for the sample store and order, wrapping the given
/// `OrderStatus` elements.
pub fn tracker_envelope(as_of: &str, statuses: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <soap:Body>
        <GetTrackerDataResponse xmlns="http://www.dominos.com/message/">
            <Version>1.5</Version>
            <Query>
                <StoreID>{SAMPLE_STORE_ID}</StoreID>
                <OrderKey>{SAMPLE_ORDER_KEY}</OrderKey>
            </Query>
            <AsOf>{as_of}</AsOf>
            <OrderStatuses>{}</OrderStatuses>
        </GetTrackerDataResponse>
    </soap:Body>
</soap:Envelope>"#,
        statuses.concat()
    )
}
