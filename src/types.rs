use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{CrossingError, Error, Result};

pub const BLUE_HOUR_ALTITUDE: f64 = -10.0;
pub const GOLDEN_HOUR_ALTITUDE: f64 = -4.0;

/// Whole seconds since the Unix epoch, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// 00:00:00 UTC of the given calendar date.
    pub fn utc_midnight(year: i32, month: u32, day: u32) -> Result<Self> {
        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(Error::InvalidDate { year, month, day })?;
        Ok(Self(midnight.and_utc().timestamp()))
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.timestamp())
    }

    pub fn to_datetime(self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0).ok_or(Error::TimestampOutOfRange(self.0))
    }

    pub fn seconds(self) -> i64 {
        self.0
    }

    pub fn add_seconds(self, secs: i64) -> Self {
        Self(self.0 + secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            Err(_) => write!(f, "@{}", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Morning crossing, sun ascending.
    Rising,
    /// Evening crossing, sun descending.
    Setting,
}

/// Per-day solar quantities needed by the hour-angle solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    pub declination_rad: f64,
    pub equation_of_time_min: f64,
}

pub type CrossingResult = std::result::Result<Timestamp, CrossingError>;

/// How the integer-hour local offset used for day framing is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezoneMode {
    /// `round(longitude / 15)`, ties to even. Ignores political zones and DST.
    #[default]
    LongitudeDerived,
    /// Caller-supplied offset from UTC in whole hours.
    FixedOffset(i32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub timezone: TimezoneMode,
    /// Below this `|cos(lat)·cos(decl)|` the crossing is treated as degenerate.
    /// Calibrated for f64 arithmetic.
    pub degenerate_denominator: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            timezone: TimezoneMode::LongitudeDerived,
            degenerate_denominator: crate::angles::DEGENERATE_DENOMINATOR,
        }
    }
}

/// Named solar-altitude thresholds bounding twilight lighting periods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    BlueHour,
    GoldenHour,
    Custom(f64),
}

impl Threshold {
    pub fn altitude(&self) -> f64 {
        match self {
            Self::BlueHour => BLUE_HOUR_ALTITUDE,
            Self::GoldenHour => GOLDEN_HOUR_ALTITUDE,
            Self::Custom(alt) => *alt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingEvent {
    pub threshold: Threshold,
    pub direction: Direction,
    pub result: CrossingResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCrossings {
    pub day_start: Timestamp,
    pub events: Vec<CrossingEvent>,
}

/// Remaining time until an event, truncated to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Countdown {
    pub hours: i64,
    pub minutes: i64,
}

impl Countdown {
    pub fn from_seconds(secs: i64) -> Self {
        Self {
            hours: secs / 3600,
            minutes: (secs % 3600) / 60,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpcomingEvent {
    pub threshold: Threshold,
    pub direction: Direction,
    /// 0 for the day containing `now`, 1 for the next day.
    pub day_index: u32,
    pub at: Timestamp,
    pub countdown: Countdown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub coordinate: GeoCoordinate,
    pub thresholds: Vec<Threshold>,
    pub directions: Vec<Direction>,
    pub solver: SolverConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            coordinate: GeoCoordinate::new(31.2304, 121.4737),
            thresholds: vec![Threshold::BlueHour, Threshold::GoldenHour],
            directions: vec![Direction::Rising],
            solver: SolverConfig::default(),
        }
    }
}
