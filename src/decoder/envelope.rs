//! String-only shadow of the tracker's SOAP envelope.
//!
//! Element names are matched on their local name, so `soap:Body` and `Body`
//! are the same element. Wrappers are required, leaves default to empty.

use super::{DecodeError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

const ENVELOPE_ELEMENT: &str = "Envelope";

#[derive(Deserialize, Debug)]
pub(super) struct RawEnvelope {
    #[serde(rename = "Body")]
    pub body: RawBody,
}

#[derive(Deserialize, Debug)]
pub(super) struct RawBody {
    #[serde(rename = "GetTrackerDataResponse")]
    pub response: RawTrackerResponse,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawTrackerResponse {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub query: RawQuery,

    #[serde(default)]
    pub as_of: String,

    #[serde(default)]
    pub order_statuses: RawOrderStatuses,
}

#[derive(Deserialize, Debug, Default)]
pub(super) struct RawQuery {
    #[serde(rename = "StoreID", default)]
    pub store_id: String,

    #[serde(rename = "OrderKey", default)]
    pub order_key: String,
}

#[derive(Deserialize, Debug, Default)]
pub(super) struct RawOrderStatuses {
    #[serde(rename = "OrderStatus", default)]
    pub statuses: Vec<RawOrderStatus>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub(super) struct RawOrderStatus {
    #[serde(rename = "OrderDescription", default)]
    pub description: String,

    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub oven_time: String,

    #[serde(default)]
    pub rack_time: String,

    #[serde(default)]
    pub route_time: String,

    #[serde(default)]
    pub delivery_time: String,
}

pub(super) fn parse_envelope(data: &[u8]) -> Result<RawEnvelope> {
    let xml = std::str::from_utf8(data).map_err(|e| {
        DecodeError::MalformedEnvelope(format!("response body is not valid UTF-8: {e}"))
    })?;

    ensure_envelope_root(xml)?;

    quick_xml::de::from_str::<RawEnvelope>(xml)
        .map_err(|e| DecodeError::MalformedEnvelope(e.to_string()))
}

/// The serde pass does not look at the root element's name, so it is checked
/// here before deserializing.
fn ensure_envelope_root(xml: &str) -> Result<()> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                let name = element.local_name();
                if name.as_ref() == ENVELOPE_ELEMENT.as_bytes() {
                    return Ok(());
                }
                return Err(DecodeError::MalformedEnvelope(format!(
                    "expected root element `{ENVELOPE_ELEMENT}`, found `{}`",
                    String::from_utf8_lossy(name.as_ref())
                )));
            }
            Ok(Event::Eof) => {
                return Err(DecodeError::MalformedEnvelope(
                    "document has no root element".to_owned(),
                ))
            }
            Ok(_) => continue,
            Err(e) => {
                return Err(DecodeError::MalformedEnvelope(format!(
                    "invalid XML at position {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_tools::envelopes::SAMPLE_ENVELOPE;
    use rstest::*;

    #[rstest]
    fn parses_namespaced_envelope() {
        let envelope = parse_envelope(SAMPLE_ENVELOPE.as_bytes()).unwrap();

        let response = envelope.body.response;
        assert_eq!("1.5", response.version);
        assert_eq!("6228", response.query.store_id);
        assert_eq!("622834370420", response.query.order_key);
        assert_eq!("2012-10-02T02:57:08", response.as_of);
        assert!(response.order_statuses.statuses.is_empty());
    }

    #[rstest]
    fn ignores_unknown_elements() {
        let xml = r#"
            <Envelope>
                <Header><Session>abc</Session></Header>
                <Body>
                    <GetTrackerDataResponse>
                        <Version>1.5</Version>
                        <Promotion>Two for Tuesday</Promotion>
                        <OrderStatuses>
                            <OrderStatus>
                                <OrderDescription>Bake</OrderDescription>
                                <DriverName>Sam</DriverName>
                                <StartTime>2012-10-02T18:01:00</StartTime>
                            </OrderStatus>
                        </OrderStatuses>
                    </GetTrackerDataResponse>
                </Body>
            </Envelope>"#;

        let response = parse_envelope(xml.as_bytes()).unwrap().body.response;

        assert_eq!("1.5", response.version);
        assert_eq!("", response.as_of);
        assert_eq!("", response.query.store_id);
        assert_eq!(1, response.order_statuses.statuses.len());

        let status = &response.order_statuses.statuses[0];
        assert_eq!("Bake", status.description);
        assert_eq!("2012-10-02T18:01:00", status.start_time);
        assert_eq!("", status.oven_time);
    }

    #[rstest]
    fn collects_statuses_separated_by_unknown_elements() {
        let xml = r#"
            <Envelope><Body><GetTrackerDataResponse>
                <OrderStatuses>
                    <OrderStatus><OrderDescription>Order Placed</OrderDescription></OrderStatus>
                    <Note>x</Note>
                    <OrderStatus><OrderDescription>Prep</OrderDescription></OrderStatus>
                </OrderStatuses>
            </GetTrackerDataResponse></Body></Envelope>"#;

        let response = parse_envelope(xml.as_bytes()).unwrap().body.response;

        let descriptions: Vec<&str> = response
            .order_statuses
            .statuses
            .iter()
            .map(|status| status.description.as_str())
            .collect();
        assert_eq!(vec!["Order Placed", "Prep"], descriptions);
    }

    #[rstest]
    fn whitespace_only_leaf_is_trimmed_to_empty() {
        let xml = "<Envelope><Body><GetTrackerDataResponse>\
            <AsOf>   </AsOf>\
            </GetTrackerDataResponse></Body></Envelope>";

        let response = parse_envelope(xml.as_bytes()).unwrap().body.response;

        assert_eq!("", response.as_of);
    }

    #[rstest]
    fn empty_leaf_elements_decode_as_empty_strings() {
        let xml = r#"
            <Envelope><Body><GetTrackerDataResponse>
                <AsOf/>
                <OrderStatuses>
                    <OrderStatus>
                        <OrderDescription>Order Placed</OrderDescription>
                        <StartTime></StartTime>
                        <OvenTime/>
                    </OrderStatus>
                </OrderStatuses>
            </GetTrackerDataResponse></Body></Envelope>"#;

        let response = parse_envelope(xml.as_bytes()).unwrap().body.response;

        assert_eq!("", response.as_of);
        let status = &response.order_statuses.statuses[0];
        assert_eq!("", status.start_time);
        assert_eq!("", status.oven_time);
    }

    #[rstest]
    #[case::missing_body("<Envelope><GetTrackerDataResponse/></Envelope>")]
    #[case::missing_response("<Envelope><Body><Fault/></Body></Envelope>")]
    #[case::wrong_root("<Body><GetTrackerDataResponse/></Body>")]
    #[case::truncated("<Envelope><Body><GetTrackerDataResponse><Version>1.5")]
    #[case::mismatched_tags("<Envelope><Body></Envelope></Body>")]
    #[case::empty_document("")]
    #[case::not_xml("Invalid phone number")]
    fn rejects_structurally_malformed_input(#[case] xml: &str) {
        let result = parse_envelope(xml.as_bytes());
        assert!(
            matches!(result, Err(DecodeError::MalformedEnvelope(_))),
            "{result:?}"
        );
    }

    #[rstest]
    fn rejects_invalid_utf8() {
        let result = parse_envelope(&[b'<', 0xff, 0xfe, b'>']);
        assert!(matches!(result, Err(DecodeError::MalformedEnvelope(_))));
    }
}
