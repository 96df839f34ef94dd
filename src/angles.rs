use log::trace;

use crate::error::CrossingError;
use crate::types::{SolarEphemeris, Timestamp};

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const UNIX_EPOCH_JULIAN_DAY: f64 = 2440587.5;
pub const J2000_JULIAN_DAY: f64 = 2451545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Smallest `|cos(lat)·cos(decl)|` for which the hour-angle inversion is trusted.
/// Tuned for f64; revisit if the arithmetic is ever narrowed to f32.
pub const DEGENERATE_DENOMINATOR: f64 = 1e-4;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn julian_day(ts: Timestamp) -> f64 {
    ts.seconds() as f64 / SECONDS_PER_DAY + UNIX_EPOCH_JULIAN_DAY
}

pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JULIAN_DAY) / DAYS_PER_JULIAN_CENTURY
}

// ── Solar position series (degrees in, degrees out) ──

pub fn mean_longitude(jc: f64) -> f64 {
    normalize_angle(280.46646 + jc * (36000.76983 + jc * 0.0003032))
}

pub fn mean_anomaly(jc: f64) -> f64 {
    normalize_angle(357.52911 + jc * (35999.05029 - 0.0001537 * jc))
}

pub fn orbit_eccentricity(jc: f64) -> f64 {
    0.016708634 - jc * (0.000042037 + 0.0000001267 * jc)
}

/// Longitude of the ascending node of the lunar orbit.
pub fn lunar_node_longitude(jc: f64) -> f64 {
    125.04 - 1934.136 * jc
}

pub fn equation_of_center(jc: f64, mean_anomaly: f64) -> f64 {
    let m = deg_to_rad(mean_anomaly);
    m.sin() * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * jc)
        + (3.0 * m).sin() * 0.000289
}

pub fn true_longitude(jc: f64) -> f64 {
    mean_longitude(jc) + equation_of_center(jc, mean_anomaly(jc))
}

pub fn apparent_longitude(jc: f64) -> f64 {
    let omega = deg_to_rad(lunar_node_longitude(jc));
    true_longitude(jc) - 0.00569 - 0.00478 * omega.sin()
}

pub fn mean_obliquity(jc: f64) -> f64 {
    let seconds = 21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

pub fn corrected_obliquity(jc: f64) -> f64 {
    let omega = deg_to_rad(lunar_node_longitude(jc));
    mean_obliquity(jc) + 0.00256 * omega.cos()
}

/// Solar declination in radians.
pub fn solar_declination(jc: f64) -> f64 {
    let obliquity = deg_to_rad(corrected_obliquity(jc));
    let lambda = deg_to_rad(apparent_longitude(jc));
    (obliquity.sin() * lambda.sin()).asin()
}

/// Equation of time in minutes; positive when the sundial runs ahead of the clock.
pub fn equation_of_time(jc: f64) -> f64 {
    let obliquity = deg_to_rad(corrected_obliquity(jc));
    let l0 = deg_to_rad(mean_longitude(jc));
    let m = deg_to_rad(mean_anomaly(jc));
    let e = orbit_eccentricity(jc);
    let y = (obliquity / 2.0).tan().powi(2);

    let eq = y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * rad_to_deg(eq)
}

pub fn solar_ephemeris(ts: Timestamp) -> SolarEphemeris {
    let jc = julian_century(julian_day(ts));
    let ephemeris = SolarEphemeris {
        declination_rad: solar_declination(jc),
        equation_of_time_min: equation_of_time(jc),
    };
    trace!(
        "ephemeris at {}: jc={:.9} decl={:.4}° eot={:.3} min",
        ts,
        jc,
        rad_to_deg(ephemeris.declination_rad),
        ephemeris.equation_of_time_min
    );
    ephemeris
}

// ── Hour angle ──

/// Hour angle in degrees, within `[0, 180]`, at which the sun's centre sits
/// at `altitude` degrees for an observer at `latitude`.
pub fn hour_angle_for_altitude(
    latitude: f64,
    declination_rad: f64,
    altitude: f64,
) -> Result<f64, CrossingError> {
    hour_angle_for_altitude_with_tolerance(
        latitude,
        declination_rad,
        altitude,
        DEGENERATE_DENOMINATOR,
    )
}

pub fn hour_angle_for_altitude_with_tolerance(
    latitude: f64,
    declination_rad: f64,
    altitude: f64,
    tolerance: f64,
) -> Result<f64, CrossingError> {
    let lat_rad = deg_to_rad(latitude);
    let alt_rad = deg_to_rad(altitude);

    let numerator = alt_rad.sin() - lat_rad.sin() * declination_rad.sin();
    let denominator = lat_rad.cos() * declination_rad.cos();
    if denominator.abs() < tolerance {
        return Err(CrossingError::DenominatorTooSmall { denominator });
    }

    let cos_h = numerator / denominator;
    if !(-1.0..=1.0).contains(&cos_h) {
        return Err(CrossingError::CosineOutOfRange { value: cos_h });
    }
    Ok(rad_to_deg(cos_h.acos()))
}

/// Geometric altitude of the sun's centre, degrees, at `hour_angle` degrees from solar noon.
pub fn solar_altitude(latitude: f64, declination_rad: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_alt = lat_rad.sin() * declination_rad.sin()
        + lat_rad.cos() * declination_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}
