use chrono::{FixedOffset, Timelike};
use chrono_tz::Asia::Shanghai;

use golden_hour::angles::{rad_to_deg, solar_ephemeris};
use golden_hour::crossing::*;
use golden_hour::error::CrossingError;
use golden_hour::types::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

const SHANGHAI: GeoCoordinate = GeoCoordinate::new(31.2304, 121.4737);

fn feb_19() -> Timestamp {
    Timestamp::utc_midnight(2026, 2, 19).unwrap()
}

// ── Shanghai regression ──

#[test]
fn test_shanghai_morning_bands_in_morning_hours() {
    let blue = solve_altitude_crossing(feb_19(), SHANGHAI, -10.0, Direction::Rising);
    let golden = solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, Direction::Rising);
    assert_eq!(status(&blue), "success");
    assert_eq!(status(&golden), "success");

    let utc8 = FixedOffset::east_opt(8 * 3600).unwrap();
    let blue = blue.unwrap();
    let golden = golden.unwrap();
    let blue_local = blue.to_datetime().unwrap().with_timezone(&utc8);
    let golden_local = golden.to_datetime().unwrap().with_timezone(&utc8);

    assert!((4..10).contains(&blue_local.hour()), "blue={}", blue_local);
    assert!((4..10).contains(&golden_local.hour()), "golden={}", golden_local);
    assert!(golden > blue);
}

#[test]
fn test_shanghai_morning_exact_instants() {
    let blue = solve_altitude_crossing(feb_19(), SHANGHAI, -10.0, Direction::Rising).unwrap();
    let golden = solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, Direction::Rising).unwrap();
    // 05:48:23 and 06:16:48 Asia/Shanghai
    assert_approx!(blue.seconds(), 1_771_451_303, 2.0);
    assert_approx!(golden.seconds(), 1_771_453_008, 2.0);

    let golden_local = golden.to_datetime().unwrap().with_timezone(&Shanghai);
    assert_eq!((golden_local.hour(), golden_local.minute()), (6, 16));
}

#[test]
fn test_shanghai_evening_bands() {
    let golden = solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, Direction::Setting).unwrap();
    let blue = solve_altitude_crossing(feb_19(), SHANGHAI, -10.0, Direction::Setting).unwrap();
    assert_approx!(golden.seconds(), 1_771_495_148, 2.0);
    assert_approx!(blue.seconds(), 1_771_496_854, 2.0);
    assert!(blue > golden);
}

#[test]
fn test_morning_and_evening_symmetric_about_solar_noon() {
    let eot = solar_ephemeris(feb_19()).equation_of_time_min;
    let noon = feb_19().seconds() as f64
        + (solar_noon_minutes(SHANGHAI.longitude, eot, 8) / 60.0 - 8.0) * 3600.0;
    let rise = solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, Direction::Rising).unwrap();
    let set = solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, Direction::Setting).unwrap();
    assert_approx!(noon - rise.seconds() as f64, set.seconds() as f64 - noon, 2.0);
}

// ── Ordering ──

#[test]
fn test_rising_precedes_setting() {
    let day = Timestamp::utc_midnight(2026, 6, 21).unwrap();
    for coord in [
        GeoCoordinate::new(0.0, 0.0),
        GeoCoordinate::new(51.4769, 0.0),
        GeoCoordinate::new(-33.87, 151.21),
        SHANGHAI,
    ] {
        let rise = solve_altitude_crossing(day, coord, -0.833, Direction::Rising).unwrap();
        let set = solve_altitude_crossing(day, coord, -0.833, Direction::Setting).unwrap();
        assert!(rise < set, "{:?}: {} !< {}", coord, rise, set);
    }
}

#[test]
fn test_lower_altitude_rises_earlier() {
    let altitudes = [-18.0, -12.0, -10.0, -6.0, -4.0, -0.833, 0.0, 6.0];
    let times: Vec<Timestamp> = altitudes
        .iter()
        .map(|&a| solve_altitude_crossing(feb_19(), SHANGHAI, a, Direction::Rising).unwrap())
        .collect();
    for pair in times.windows(2) {
        assert!(pair[0] < pair[1], "{:?}", times);
    }
}

// ── Failure outcomes ──

#[test]
fn test_zenith_never_reached() {
    let result = solve_altitude_crossing(feb_19(), SHANGHAI, 90.0, Direction::Rising);
    match result {
        Err(CrossingError::CosineOutOfRange { value }) => assert!(value > 1.0),
        other => panic!("expected CosineOutOfRange, got {:?}", other),
    }
    assert!(status(&result).starts_with("cosine_out_of_range_"));
}

#[test]
fn test_near_pole_deep_twilight() {
    let coord = GeoCoordinate::new(89.9, 0.0);
    for (month, day) in [(6, 21), (12, 21)] {
        let ts = Timestamp::utc_midnight(2026, month, day).unwrap();
        let result = solve_altitude_crossing(ts, coord, -50.0, Direction::Rising);
        assert!(
            matches!(
                result,
                Err(CrossingError::CosineOutOfRange { .. })
                    | Err(CrossingError::DenominatorTooSmall { .. })
            ),
            "{}-{}: {:?}",
            month,
            day,
            result
        );
    }
}

#[test]
fn test_exact_pole_is_degenerate() {
    let result = solve_altitude_crossing(
        feb_19(),
        GeoCoordinate::new(90.0, 0.0),
        -4.0,
        Direction::Setting,
    );
    assert_eq!(status(&result), "denominator_too_small");
}

#[test]
fn test_polar_night_and_midnight_sun_distinguished() {
    let svalbard = GeoCoordinate::new(78.2, 15.6);
    let winter = Timestamp::utc_midnight(2026, 12, 21).unwrap();
    let summer = Timestamp::utc_midnight(2026, 6, 21).unwrap();

    let night = solve_altitude_crossing(winter, svalbard, -0.833, Direction::Rising).unwrap_err();
    let day = solve_altitude_crossing(summer, svalbard, -0.833, Direction::Setting).unwrap_err();
    assert!(night.is_never_reached_above());
    assert!(!day.is_never_reached_above());
}

// ── Time assembly ──

#[test]
fn test_setting_wraps_into_next_utc_day() {
    // Springfield, IL: local sunset ≈ 19:30 at UTC-6 lands after 00:00 UTC next day.
    let day = Timestamp::utc_midnight(2026, 6, 21).unwrap();
    let coord = GeoCoordinate::new(39.8, -89.6);
    let set = solve_altitude_crossing(day, coord, -0.833, Direction::Setting).unwrap();
    assert!(set.seconds() > day.seconds() + 86400);
    let utc = set.to_datetime().unwrap();
    assert_eq!((utc.hour(), utc.minute()), (1, 29));
}

#[test]
fn test_fixed_offset_matches_longitude_derived_when_equal() {
    let config = SolverConfig {
        timezone: TimezoneMode::FixedOffset(8),
        ..SolverConfig::default()
    };
    for direction in [Direction::Rising, Direction::Setting] {
        assert_eq!(
            solve_altitude_crossing_with(&config, feb_19(), SHANGHAI, -4.0, direction),
            solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, direction)
        );
    }
}

#[test]
fn test_fixed_offset_changes_day_framing() {
    // At UTC+0 the Shanghai sunrise lands before local midnight and wraps by a day.
    let config = SolverConfig {
        timezone: TimezoneMode::FixedOffset(0),
        ..SolverConfig::default()
    };
    let derived = solve_altitude_crossing(feb_19(), SHANGHAI, -4.0, Direction::Rising).unwrap();
    let fixed =
        solve_altitude_crossing_with(&config, feb_19(), SHANGHAI, -4.0, Direction::Rising)
            .unwrap();
    assert_approx!(fixed.seconds() - derived.seconds(), 86400, 1.0);
}

#[test]
fn test_declination_used_is_from_day_start() {
    let eph = solar_ephemeris(feb_19());
    assert_approx!(rad_to_deg(eph.declination_rad), -11.35, 0.01);
}

#[test]
fn test_deterministic_repeat_calls() {
    let first = solve_altitude_crossing(feb_19(), SHANGHAI, -10.0, Direction::Rising);
    for _ in 0..10 {
        assert_eq!(
            solve_altitude_crossing(feb_19(), SHANGHAI, -10.0, Direction::Rising),
            first
        );
    }
}
