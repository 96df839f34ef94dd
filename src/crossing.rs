use log::{debug, trace};

use crate::angles::{self, DEGREES_PER_HOUR};
use crate::types::{
    CrossingResult, Direction, GeoCoordinate, SolverConfig, Timestamp, TimezoneMode,
};

/// Approximate local UTC offset in whole hours from longitude alone.
///
/// Half-hour ties round to even. This does not match political time zones.
pub fn timezone_offset_hours(longitude: f64) -> i32 {
    (longitude / DEGREES_PER_HOUR).round_ties_even() as i32
}

fn resolve_offset(mode: TimezoneMode, longitude: f64) -> i32 {
    match mode {
        TimezoneMode::LongitudeDerived => timezone_offset_hours(longitude),
        TimezoneMode::FixedOffset(hours) => hours,
    }
}

/// Local solar noon in minutes after local midnight.
pub fn solar_noon_minutes(longitude: f64, equation_of_time: f64, timezone_offset: i32) -> f64 {
    720.0 - 4.0 * longitude - equation_of_time + f64::from(timezone_offset) * 60.0
}

/// Wraps a local hour into `[0, 24)` with a single ±24 adjustment.
///
/// Inputs further than one day outside the range stay out of range.
pub fn normalize_local_hour(hour: f64) -> f64 {
    if hour < 0.0 {
        hour + 24.0
    } else if hour >= 24.0 {
        hour - 24.0
    } else {
        hour
    }
}

/// Instant at which the sun's centre crosses `altitude` degrees on the day
/// starting at `day_start` (expected to be 00:00 UTC).
pub fn solve_altitude_crossing(
    day_start: Timestamp,
    coordinate: GeoCoordinate,
    altitude: f64,
    direction: Direction,
) -> CrossingResult {
    solve_altitude_crossing_with(
        &SolverConfig::default(),
        day_start,
        coordinate,
        altitude,
        direction,
    )
}

pub fn solve_altitude_crossing_with(
    config: &SolverConfig,
    day_start: Timestamp,
    coordinate: GeoCoordinate,
    altitude: f64,
    direction: Direction,
) -> CrossingResult {
    let ephemeris = angles::solar_ephemeris(day_start);

    let hour_angle = angles::hour_angle_for_altitude_with_tolerance(
        coordinate.latitude,
        ephemeris.declination_rad,
        altitude,
        config.degenerate_denominator,
    )
    .inspect_err(|err| {
        debug!(
            "no {:?} crossing of {}° at ({}, {}) on {}: {}",
            direction, altitude, coordinate.latitude, coordinate.longitude, day_start, err
        );
    })?;

    let offset = resolve_offset(config.timezone, coordinate.longitude);
    let noon_hour =
        solar_noon_minutes(coordinate.longitude, ephemeris.equation_of_time_min, offset) / 60.0;
    let half_arc_hours = hour_angle / DEGREES_PER_HOUR;

    let local_hour = normalize_local_hour(match direction {
        Direction::Rising => noon_hour - half_arc_hours,
        Direction::Setting => noon_hour + half_arc_hours,
    });
    let utc_hour = local_hour - f64::from(offset);
    // Truncates toward zero.
    let offset_secs = (utc_hour * 3600.0) as i64;

    trace!(
        "{:?} {}°: H={:.4}° noon={:.4}h tz={} local={:.4}h utc={:.4}h",
        direction,
        altitude,
        hour_angle,
        noon_hour,
        offset,
        local_hour,
        utc_hour
    );

    Ok(day_start.add_seconds(offset_secs))
}

/// Status string for a solver outcome: `success` or the error's status.
pub fn status(result: &CrossingResult) -> String {
    match result {
        Ok(_) => "success".to_string(),
        Err(err) => err.status(),
    }
}
