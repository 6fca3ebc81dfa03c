//! Calendar-day boundaries for workout retrieval.
//!
//! A day is the half-open interval `[start, end)` where `start` is local
//! midnight of the requested date and `end` is exactly 24 hours later. The
//! caller's clock is expressed as a fixed UTC offset, so every day is exactly
//! 24 hours long.

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Largest offset accepted from callers (UTC+14:00 / UTC-14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Builds a fixed offset from a signed number of minutes east of UTC.
pub fn utc_offset_from_minutes(minutes: i32) -> Result<FixedOffset, ValidationError> {
    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
        return Err(ValidationError::out_of_range(
            "utc_offset_minutes",
            -MAX_UTC_OFFSET_MINUTES,
            MAX_UTC_OFFSET_MINUTES,
            minutes,
        ));
    }
    FixedOffset::east_opt(minutes * 60)
        .ok_or_else(|| ValidationError::invalid_format("utc_offset_minutes", "not a valid offset"))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format("date", "expected YYYY-MM-DD"))
}

/// Half-open `[start, end)` interval covering one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    start: Timestamp,
    end: Timestamp,
}

impl DayRange {
    /// The day `date` as seen from a clock running at `offset`.
    pub fn for_local_date(date: NaiveDate, offset: FixedOffset) -> Result<Self, ValidationError> {
        let local_midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ValidationError::invalid_format("date", "no local midnight"))?;
        let utc_midnight = local_midnight
            .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
            .ok_or_else(|| ValidationError::invalid_format("date", "outside supported range"))?;
        let start = Utc.from_utc_datetime(&utc_midnight);
        let end = start
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| ValidationError::invalid_format("date", "outside supported range"))?;

        Ok(Self {
            start: Timestamp::from_datetime(start),
            end: Timestamp::from_datetime(end),
        })
    }

    /// The UTC calendar day `date`.
    pub fn for_utc_date(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::for_local_date(date, utc_offset_from_minutes(0)?)
    }

    /// Inclusive lower bound (local midnight).
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Exclusive upper bound (next local midnight).
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// `start <= instant < end`.
    pub fn contains(&self, instant: &Timestamp) -> bool {
        !instant.is_before(&self.start) && instant.is_before(&self.end)
    }
}
