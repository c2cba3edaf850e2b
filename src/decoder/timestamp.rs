use super::{DecodeError, Result, TimestampField};
use chrono::{Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use model::tracker::TrackerTime;

/// The tracker service reports every timestamp in US Eastern time without
/// saying so.
pub const TRACKER_TIMEZONE: &str = "America/New_York";

/// Literal wall-clock format used by the service: no fraction, no offset.
const TRACKER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Turns the service's zone-less timestamps into points in time anchored to
/// [`TRACKER_TIMEZONE`].
#[derive(Debug, Clone, Copy)]
pub struct TimestampNormalizer {
    timezone: Tz,
}

impl TimestampNormalizer {
    pub fn new() -> Result<Self> {
        Self::for_timezone(TRACKER_TIMEZONE)
    }

    pub fn for_timezone(name: &str) -> Result<Self> {
        let timezone = name
            .parse::<Tz>()
            .map_err(|e| DecodeError::TimezoneUnavailable(format!("{name}: {e}")))?;

        Ok(Self { timezone })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Normalizes one timestamp element.
    ///
    /// An empty value means the stage has not happened yet and yields `None`.
    /// Anything else must match the literal `YYYY-MM-DDTHH:MM:SS` format.
    pub fn normalize(
        &self,
        value: &str,
        field: TimestampField,
        status_index: Option<usize>,
    ) -> Result<Option<TrackerTime>> {
        if value.is_empty() {
            return Ok(None);
        }

        let naive = NaiveDateTime::parse_from_str(value, TRACKER_TIME_FORMAT).map_err(|source| {
            DecodeError::MalformedTimestamp {
                field,
                status_index,
                value: value.to_owned(),
                source,
            }
        })?;

        Ok(Some(self.localize(&naive)))
    }

    fn localize(&self, naive: &NaiveDateTime) -> TrackerTime {
        match self.timezone.from_local_datetime(naive) {
            LocalResult::Single(time) => time,
            // Repeated hour when daylight time ends: keep the first pass.
            LocalResult::Ambiguous(earliest, _) => earliest,
            // Skipped hour when daylight time starts: read the wall time with
            // the offset in force before the jump. Reading the wall time as
            // UTC lands before the transition for zones west of Greenwich.
            LocalResult::None => {
                let offset = self.timezone.offset_from_utc_datetime(naive).fix();
                let utc = *naive - Duration::seconds(i64::from(offset.local_minus_utc()));
                self.timezone.from_utc_datetime(&utc)
            }
        }
    }
}

/// Normalizes a single `AsOf`-style value with the tracker timezone.
pub fn parse_eastern(value: &str) -> Result<Option<TrackerTime>> {
    TimestampNormalizer::new()?.normalize(value, TimestampField::AsOf, None)
}
