//! Decoding of the tracker service's SOAP reply into the domain [`Response`].
//!
//! Decoding runs in two phases: the XML is first deserialized into a
//! string-only shadow of the envelope, then every timestamp goes through the
//! [`TimestampNormalizer`] while the domain values are built.

mod envelope;
pub mod timestamp;

use self::envelope::{RawOrderStatus, RawTrackerResponse};
use model::tracker::{OrderStatus, Query, Response};
use std::fmt;
use std::fmt::Formatter;

pub use self::timestamp::{parse_eastern, TimestampNormalizer, TRACKER_TIMEZONE};

pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed tracker envelope: {0}")]
    MalformedEnvelope(String),

    #[error(
        "malformed {field} timestamp {value:?}{}: {source}",
        describe_status_index(.status_index)
    )]
    MalformedTimestamp {
        field: TimestampField,
        status_index: Option<usize>,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timezone unavailable: {0}")]
    TimezoneUnavailable(String),
}

fn describe_status_index(status_index: &Option<usize>) -> String {
    match status_index {
        Some(index) => format!(" in order status #{index}"),
        None => String::new(),
    }
}

/// Timestamp elements of the tracker reply, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    AsOf,
    StartTime,
    OvenTime,
    RackTime,
    RouteTime,
    DeliveryTime,
}

impl fmt::Display for TimestampField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimestampField::AsOf => "AsOf",
            TimestampField::StartTime => "StartTime",
            TimestampField::OvenTime => "OvenTime",
            TimestampField::RackTime => "RackTime",
            TimestampField::RouteTime => "RouteTime",
            TimestampField::DeliveryTime => "DeliveryTime",
        };
        f.write_str(name)
    }
}

/// Decodes the raw body returned by the tracker service.
///
/// Structural problems (invalid XML, wrong root element, missing `Body` or
/// `GetTrackerDataResponse`) fail with [`DecodeError::MalformedEnvelope`].
/// Missing leaf elements decode as empty values. Any malformed timestamp
/// fails the whole decode; no partial response is returned.
pub fn decode_envelope(data: &[u8]) -> Result<Response> {
    let envelope = envelope::parse_envelope(data)?;
    let normalizer = TimestampNormalizer::new()?;

    let response = convert_response(&normalizer, envelope.body.response)?;

    tracing::debug!(
        version = %response.version,
        store_id = %response.query.store_id,
        order_key = %response.query.order_key,
        statuses = response.statuses.len(),
        "Decoded tracker envelope"
    );

    Ok(response)
}

fn convert_response(
    normalizer: &TimestampNormalizer,
    raw: RawTrackerResponse,
) -> Result<Response> {
    let timestamp = normalizer.normalize(&raw.as_of, TimestampField::AsOf, None)?;

    let statuses = raw
        .order_statuses
        .statuses
        .into_iter()
        .enumerate()
        .map(|(index, status)| convert_status(normalizer, index, status))
        .collect::<Result<Vec<_>>>()?;

    Ok(Response {
        version: raw.version,
        query: Query {
            store_id: raw.query.store_id,
            order_key: raw.query.order_key,
        },
        timestamp,
        statuses,
    })
}

fn convert_status(
    normalizer: &TimestampNormalizer,
    index: usize,
    raw: RawOrderStatus,
) -> Result<OrderStatus> {
    let normalize =
        |value: &str, field: TimestampField| normalizer.normalize(value, field, Some(index));

    Ok(OrderStatus {
        start_time: normalize(&raw.start_time, TimestampField::StartTime)?,
        oven_time: normalize(&raw.oven_time, TimestampField::OvenTime)?,
        rack_time: normalize(&raw.rack_time, TimestampField::RackTime)?,
        route_time: normalize(&raw.route_time, TimestampField::RouteTime)?,
        delivery_time: normalize(&raw.delivery_time, TimestampField::DeliveryTime)?,
        description: raw.description,
    })
}
