use thiserror::Error;

/// Result type alias for fallible operations outside the solver itself.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a requested altitude crossing does not exist on a given day.
///
/// Both variants describe a geometric fact about the day, location and
/// altitude, not a transient failure. Retrying with the same inputs yields
/// the same outcome.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CrossingError {
    /// `cos(lat)·cos(decl)` is too close to zero, so the hour angle is ill-conditioned.
    #[error("denominator too small ({denominator:e})")]
    DenominatorTooSmall { denominator: f64 },
    /// The sun never reaches the requested altitude that day.
    #[error("cosine of hour angle out of range ({value:.4})")]
    CosineOutOfRange { value: f64 },
}

impl CrossingError {
    /// Machine-readable status string, e.g. `cosine_out_of_range_1.2345`.
    pub fn status(&self) -> String {
        match self {
            Self::DenominatorTooSmall { .. } => "denominator_too_small".to_string(),
            Self::CosineOutOfRange { value } => format!("cosine_out_of_range_{value:.4}"),
        }
    }

    /// True when the sun stays below the target altitude all day.
    ///
    /// `cos(H) > 1` means the target is never reached from below, `cos(H) < -1`
    /// means the sun never sinks to it. Degenerate geometry answers `false`.
    pub fn is_never_reached_above(&self) -> bool {
        matches!(self, Self::CosineOutOfRange { value } if *value > 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("timestamp {0} is outside the representable date range")]
    TimestampOutOfRange(i64),
    #[error(transparent)]
    Crossing(#[from] CrossingError),
}
