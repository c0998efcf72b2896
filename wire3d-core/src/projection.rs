/// Camera and projection utilities
use nalgebra::{Point2, Point3};

use crate::error::{Error, Result};

/// Integer (column, row) position on the character grid.
///
/// Projection does not clip, so either coordinate may be negative or past
/// the grid edge.
pub type ScreenPoint = Point2<i32>;

/// Camera configuration for perspective projection onto a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: usize,
    pub height: usize,
    /// Projection scale. Not an angle.
    pub fov: f64,
}

impl Camera {
    pub fn new(width: usize, height: usize, fov: f64) -> Self {
        Self { width, height, fov }
    }

    /// Project a 3D point to grid space at the given viewer distance
    pub fn project(&self, point: &Point3<f64>, viewer_distance: f64) -> Result<ScreenPoint> {
        project(
            point,
            self.width as f64,
            self.height as f64,
            self.fov,
            viewer_distance,
        )
    }
}

/// Denominators closer to zero than this are treated as degenerate.
pub const MIN_DEPTH: f64 = 1e-6;

/// Perspective scale for a vertex at depth `z`.
pub fn perspective_factor(fov: f64, viewer_distance: f64, z: f64) -> Result<f64> {
    let depth = viewer_distance + z;
    // NaN fails the comparison and is rejected too.
    if !(depth.abs() >= MIN_DEPTH) {
        return Err(Error::DegenerateProjection { depth });
    }
    Ok(fov / depth)
}

/// Truncate toward zero, rejecting values `i32` cannot hold.
fn to_cell(value: f64) -> Option<i32> {
    let truncated = value.trunc();
    if truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX) {
        Some(truncated as i32)
    } else {
        None
    }
}

/// Project a 3D point onto a `screen_width` x `screen_height` grid.
///
/// Y is flipped since grid rows grow downward. Both coordinates are
/// truncated toward zero, not rounded. A near-zero denominator, or a result
/// that is not finite or does not fit in `i32`, is a
/// [`Error::DegenerateProjection`].
pub fn project(
    point: &Point3<f64>,
    screen_width: f64,
    screen_height: f64,
    fov: f64,
    viewer_distance: f64,
) -> Result<ScreenPoint> {
    let factor = perspective_factor(fov, viewer_distance, point.z)?;
    let x = point.x * factor + screen_width / 2.0;
    let y = -point.y * factor + screen_height / 2.0;
    match (to_cell(x), to_cell(y)) {
        (Some(x), Some(y)) => Ok(ScreenPoint::new(x, y)),
        _ => Err(Error::DegenerateProjection {
            depth: viewer_distance + point.z,
        }),
    }
}
