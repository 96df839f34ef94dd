use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use log::debug;

use crate::crossing::solve_altitude_crossing_with;
use crate::error::{Error, Result};
use crate::types::{
    Countdown, CrossingEvent, DayCrossings, ScheduleConfig, Timestamp, UpcomingEvent,
};

/// Days scanned by [`upcoming_events`]: today and tomorrow.
pub const UPCOMING_DAYS: u32 = 2;

fn invalid_date(date: NaiveDate) -> Error {
    Error::InvalidDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    }
}

/// Solver day start for a calendar date: 00:00 UTC of that date.
///
/// The solver applies the local offset itself, so a local midnight here would
/// shift every result by the offset.
pub fn day_start(date: NaiveDate) -> Result<Timestamp> {
    Timestamp::utc_midnight(date.year(), date.month(), date.day())
}

pub fn crossings_for_day(config: &ScheduleConfig, day_start: Timestamp) -> DayCrossings {
    let mut events = Vec::with_capacity(config.thresholds.len() * config.directions.len());
    for &threshold in &config.thresholds {
        for &direction in &config.directions {
            let result = solve_altitude_crossing_with(
                &config.solver,
                day_start,
                config.coordinate,
                threshold.altitude(),
                direction,
            );
            events.push(CrossingEvent {
                threshold,
                direction,
                result,
            });
        }
    }
    DayCrossings { day_start, events }
}

/// Crossings for `days` consecutive calendar days starting at `first`.
pub fn crossings_for_days(
    config: &ScheduleConfig,
    first: NaiveDate,
    days: u32,
) -> Result<Vec<DayCrossings>> {
    let mut out = Vec::with_capacity(days as usize);
    let mut date = first;
    for i in 0..days {
        out.push(crossings_for_day(config, day_start(date)?));
        if i + 1 < days {
            date = date.succ_opt().ok_or_else(|| invalid_date(date))?;
        }
    }
    Ok(out)
}

/// Successful crossings later than `now` on today and tomorrow, earliest first.
///
/// "Today" is the calendar date of `now` in its own time zone.
pub fn upcoming_events<Tz: TimeZone>(
    config: &ScheduleConfig,
    now: &DateTime<Tz>,
) -> Result<Vec<UpcomingEvent>> {
    let now_ts = Timestamp::from_datetime(now);
    let days = crossings_for_days(config, now.date_naive(), UPCOMING_DAYS)?;

    let mut upcoming = Vec::new();
    for (day_index, day) in (0u32..).zip(days) {
        for event in day.events {
            match event.result {
                Ok(at) if at > now_ts => upcoming.push(UpcomingEvent {
                    threshold: event.threshold,
                    direction: event.direction,
                    day_index,
                    at,
                    countdown: Countdown::from_seconds(at.seconds() - now_ts.seconds()),
                }),
                Ok(_) => {}
                Err(err) => debug!(
                    "skipping {:?} {:?} on day {}: {}",
                    event.threshold, event.direction, day_index, err
                ),
            }
        }
    }
    upcoming.sort_by_key(|e| e.at);
    Ok(upcoming)
}
