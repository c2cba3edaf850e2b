//! TrackerError is the error every order status lookup can fail with.
//! Transport and decoding failures are kept apart so callers can tell a
//! network problem from a reply they could not understand.

use crate::decoder::DecodeError;
use crate::tracker::TransportError;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl TrackerError {
    /// True when the failure comes from the runtime environment rather than
    /// from the service or its data.
    pub fn is_configuration_fault(&self) -> bool {
        matches!(self, Self::Decode(DecodeError::TimezoneUnavailable(_)))
    }
}
