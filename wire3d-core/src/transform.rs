/// Per-axis rotations and rotation state
use nalgebra::Point3;

/// Accumulated rotation around three axes (in degrees).
///
/// Angles are never wrapped; the trigonometric functions take care of periodicity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Advance all three axes by the same step.
    pub fn advance(&mut self, step: f64) {
        self.rotate(step, step, step);
    }
}

/// Rotate about the X axis.
pub fn rotate_x(point: Point3<f64>, degrees: f64) -> Point3<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point3::new(
        point.x,
        point.y * cos - point.z * sin,
        point.y * sin + point.z * cos,
    )
}

/// Rotate about the Y axis.
pub fn rotate_y(point: Point3<f64>, degrees: f64) -> Point3<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point3::new(
        point.z * sin + point.x * cos,
        point.y,
        point.z * cos - point.x * sin,
    )
}

/// Rotate about the Z axis.
pub fn rotate_z(point: Point3<f64>, degrees: f64) -> Point3<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Point3::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
        point.z,
    )
}

/// Apply the rotation in order: X, then Y, then Z.
pub fn rotate_xyz(point: Point3<f64>, rotation: &RotationState) -> Point3<f64> {
    let point = rotate_x(point, rotation.x);
    let point = rotate_y(point, rotation.y);
    rotate_z(point, rotation.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector3};

    const EPS: f64 = 1e-9;

    fn samples() -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-1.0, 1.0, -1.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(-4.5, 0.25, 7.0),
        ]
    }

    fn close(a: Point3<f64>, b: Point3<f64>) -> bool {
        (a - b).norm() < EPS
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state, RotationState::new(0.0, 0.0, 0.0));

        state.rotate(1.0, 2.0, 3.0);
        assert_eq!(state, RotationState::new(1.0, 2.0, 3.0));

        state.advance(1.0);
        assert_eq!(state, RotationState::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        for p in samples() {
            assert_eq!(rotate_x(p, 0.0), p);
            assert_eq!(rotate_y(p, 0.0), p);
            assert_eq!(rotate_z(p, 0.0), p);
            assert_eq!(rotate_xyz(p, &RotationState::zero()), p);
        }
    }

    #[test]
    fn test_rotation_is_invertible() {
        for p in samples() {
            for angle in [1.0, 33.3, 90.0, 181.0, -725.5] {
                assert!(close(rotate_x(rotate_x(p, angle), -angle), p));
                assert!(close(rotate_y(rotate_y(p, angle), -angle), p));
                assert!(close(rotate_z(rotate_z(p, angle), -angle), p));
            }
        }
    }

    #[test]
    fn test_quarter_turns() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(close(rotate_x(p, 90.0), Point3::new(1.0, -3.0, 2.0)));
        assert!(close(rotate_y(p, 90.0), Point3::new(3.0, 2.0, -1.0)));
        assert!(close(rotate_z(p, 90.0), Point3::new(-2.0, 1.0, 3.0)));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let rotation = RotationState::new(17.0, -42.0, 311.0);
        for p in samples() {
            let r = rotate_xyz(p, &rotation);
            assert!((r.coords.norm() - p.coords.norm()).abs() < EPS);
        }
    }

    #[test]
    fn test_composition_matches_matrix_order() {
        let rotation = RotationState::new(30.0, 45.0, 60.0);
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), rotation.y.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z.to_radians());

        // X first, so it sits rightmost in the matrix product.
        let matrix = rz * ry * rx;
        for p in samples() {
            assert!(close(rotate_xyz(p, &rotation), matrix * p));
        }
    }

    #[test]
    fn test_large_angles_wrap() {
        let p = Point3::new(-1.0, 1.0, -1.0);
        assert!(close(rotate_y(p, 370.0), rotate_y(p, 10.0)));
    }
}
