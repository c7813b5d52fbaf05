//! Timestamp normalization
//!
//! Source exports record times in UTC, either as unix seconds (MLS exports)
//! or as ISO-8601 strings (TowerCollector). Listings show them in a fixed
//! local zone with the offset dropped, so everything here produces
//! [`NaiveDateTime`] values in the configured zone.
//!
//! The [`Clock`] trait abstracts "now" so lookback windows are testable:
//! - [`SystemClock`] reads the wall clock
//! - [`FixedClock`] returns a settable instant for tests and replays

use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    constants::MAX_LOOKBACK_DAYS,
    errors::{DecodeError, DecodeResult},
};

/// Source of the current instant
pub trait Clock {
    /// Current time in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current time in `tz` with the offset dropped
    ///
    /// `None` only when the shifted time leaves chrono's supported range.
    fn now_local(&self, tz: Tz) -> Option<NaiveDateTime> {
        to_local_naive(self.now_utc(), tz)
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Clock frozen at `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Jump to `instant`
    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.instant = instant;
    }

    /// Move forward by `by`
    pub fn advance(&mut self, by: Duration) {
        self.instant += by;
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Convert a UTC instant into `tz` and drop the offset
///
/// Returns `None` when the local wall time falls outside chrono's range,
/// which `DateTime::naive_local` would panic on.
pub fn to_local_naive(instant: DateTime<Utc>, tz: Tz) -> Option<NaiveDateTime> {
    let offset = instant.with_timezone(&tz).offset().fix();
    instant.naive_utc().checked_add_offset(offset)
}

/// Normalize unix seconds (UTC) into local time
///
/// Returns `None` for instants chrono cannot represent, before or after
/// the shift into `tz`.
pub fn from_epoch_seconds(seconds: i64, tz: Tz) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp(seconds, 0).and_then(|utc| to_local_naive(utc, tz))
}

/// Parse an export timestamp and normalize it into local time
///
/// Accepted forms:
/// - RFC 3339 (`2024-05-01T09:30:00Z`, `2024-05-01T18:30:00+09:00`)
/// - space separated with offset (`2024-05-01 09:30:00+00:00`)
/// - naive (`2024-05-01 09:30:00`), taken as UTC
pub fn parse_timestamp(raw: &str, tz: Tz) -> DecodeResult<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DecodeError::InvalidTimestamp { reason: "empty string" });
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return localize(parsed.with_timezone(&Utc), tz);
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"] {
        if let Ok(parsed) = DateTime::parse_from_str(raw, format) {
            return localize(parsed.with_timezone(&Utc), tz);
        }
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return localize(Utc.from_utc_datetime(&naive), tz);
        }
    }

    Err(DecodeError::InvalidTimestamp {
        reason: "unrecognized format",
    })
}

fn localize(instant: DateTime<Utc>, tz: Tz) -> DecodeResult<NaiveDateTime> {
    to_local_naive(instant, tz).ok_or(DecodeError::InvalidTimestamp {
        reason: "outside the representable range",
    })
}

/// Start of the lookback window: `now - days`, floored to local midnight
///
/// `days` is limited to [`MAX_LOOKBACK_DAYS`].
pub fn lookback_cutoff(now_local: NaiveDateTime, days: u32) -> DecodeResult<NaiveDateTime> {
    if days > MAX_LOOKBACK_DAYS {
        return Err(DecodeError::ParameterOutOfRange {
            name: "lookback_days",
            value: i64::from(days),
            min: 0,
            max: i64::from(MAX_LOOKBACK_DAYS),
        });
    }

    let shifted = now_local
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or(DecodeError::InvalidTimestamp {
            reason: "lookback window starts before the representable range",
        })?;
    Ok(shifted.date().and_time(NaiveTime::MIN))
}
