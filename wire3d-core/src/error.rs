/// Error type shared by the core pipeline
use std::fmt;

/// Errors raised by the core.
///
/// Out-of-grid line endpoints and zoom input past the distance limits are
/// ordinary boundary conditions and never surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The perspective denominator `viewer_distance + z` was (nearly) zero,
    /// or the projected cell does not fit in `i32`. `depth` is that
    /// denominator.
    DegenerateProjection { depth: f64 },
    /// A configuration value is out of its allowed range.
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateProjection { depth } => {
                write!(f, "degenerate projection: perspective denominator {depth}")
            }
            Error::InvalidConfig(reason) => write!(f, "invalid render configuration: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
