//! Order status lookups against the tracker service.
//!
//! [`tracker::OrderTracker`] fetches the SOAP reply for a phone number and
//! [`decoder::decode_envelope`] turns it into a [`model::tracker::Response`]
//! whose timestamps all carry the service's Eastern offset.

pub mod config;
pub mod decoder;
pub mod logging;
pub mod result;
pub mod tracker;
