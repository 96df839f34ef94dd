pub mod angles;
pub mod crossing;
pub mod error;
pub mod schedule;
pub mod types;

pub use angles::{
    apparent_longitude, corrected_obliquity, deg_to_rad, equation_of_center, equation_of_time,
    hour_angle_for_altitude, hour_angle_for_altitude_with_tolerance, julian_century, julian_day,
    lunar_node_longitude, mean_anomaly, mean_longitude, mean_obliquity, normalize_angle,
    orbit_eccentricity, rad_to_deg, solar_altitude, solar_declination, solar_ephemeris,
    true_longitude, DEGENERATE_DENOMINATOR, DEGREES_PER_HOUR,
};

pub use crossing::{
    normalize_local_hour, solar_noon_minutes, solve_altitude_crossing,
    solve_altitude_crossing_with, status, timezone_offset_hours,
};

pub use error::{CrossingError, Error, Result};

pub use schedule::{crossings_for_day, crossings_for_days, day_start, upcoming_events};

pub use types::{
    Countdown, CrossingEvent, CrossingResult, DayCrossings, Direction, GeoCoordinate,
    ScheduleConfig, SolarEphemeris, SolverConfig, Threshold, TimezoneMode, Timestamp,
    UpcomingEvent, BLUE_HOUR_ALTITUDE, GOLDEN_HOUR_ALTITUDE,
};
