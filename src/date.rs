//! Date normalization for orbit requests
//!
//! Orbit archives key files three different ways: calendar date, day-of-year,
//! and GPS week / day-of-week. [`CanonicalDate`] derives all three once from
//! the caller's input so strategies can format paths without touching
//! calendar arithmetic themselves.

use chrono::{Datelike, NaiveDate, Weekday};

/// GPS epoch: week 0, day 0 is Sunday 1980-01-06.
const GPS_EPOCH: (i32, u32, u32) = (1980, 1, 6);

/// Errors raised while normalizing a request date
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// Year is not a four-digit number
    #[error("year must have four digits, got {0}")]
    InvalidYear(i32),

    /// Month/day (or day-of-year) does not name a real calendar date
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Result type for date operations
pub type DateResult<T> = Result<T, DateError>;

/// A fully normalized request date
///
/// Immutable once derived. Carries every encoding the provider strategies
/// need: calendar date, day-of-year, and GPS week / day-of-week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalDate {
    year: i32,
    month: u32,
    day: u32,
    doy: u32,
    gps_week: i32,
    gps_dow: u32,
}

impl CanonicalDate {
    /// Normalize a calendar date
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidYear`] when the year does not have four
    /// decimal digits, and [`DateError::InvalidDate`] when (year, month, day)
    /// is not a real calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> DateResult<Self> {
        validate_year(year)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DateError::InvalidDate(format!("{year:04}-{month:02}-{day:02} is not a valid date"))
        })?;
        Ok(Self::from_naive(date))
    }

    /// Normalize a (year, day-of-year) pair
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidYear`] for a non-four-digit year and
    /// [`DateError::InvalidDate`] when the day-of-year does not exist in that
    /// year (e.g. 366 in a non-leap year).
    pub fn from_doy(year: i32, doy: u32) -> DateResult<Self> {
        validate_year(year)?;
        let date = NaiveDate::from_yo_opt(year, doy).ok_or_else(|| {
            DateError::InvalidDate(format!("day-of-year {doy} does not exist in {year}"))
        })?;
        Ok(Self::from_naive(date))
    }

    fn from_naive(date: NaiveDate) -> Self {
        let epoch = NaiveDate::from_ymd_opt(GPS_EPOCH.0, GPS_EPOCH.1, GPS_EPOCH.2)
            .expect("GPS epoch is a valid date");
        let days_since_epoch = (date - epoch).num_days();
        // GPS weeks start on Sunday; chrono numbers Sunday as 6 from Monday.
        let gps_dow = match date.weekday() {
            Weekday::Sun => 0,
            other => other.number_from_monday(),
        };

        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            doy: date.ordinal(),
            gps_week: (days_since_epoch / 7) as i32,
            gps_dow,
        }
    }

    /// Four-digit year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month (1-31)
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Day of year (1-366)
    pub fn doy(&self) -> u32 {
        self.doy
    }

    /// GPS week number (weeks since 1980-01-06)
    pub fn gps_week(&self) -> i32 {
        self.gps_week
    }

    /// Day within the GPS week (0 = Sunday .. 6 = Saturday)
    pub fn gps_dow(&self) -> u32 {
        self.gps_dow
    }

    /// Two-digit year suffix used in short RINEX filenames
    pub fn yy(&self) -> u32 {
        (self.year % 100) as u32
    }
}

/// Reject years whose decimal representation is not four digits
pub fn validate_year(year: i32) -> DateResult<()> {
    if !(1000..=9999).contains(&year) {
        return Err(DateError::InvalidYear(year));
    }
    Ok(())
}
