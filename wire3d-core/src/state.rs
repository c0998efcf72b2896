/// Mutable per-run render state and the input events that change it
use crate::transform::RotationState;

/// Discrete input delivered by the host between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move the viewer closer (smaller distance).
    ZoomIn,
    /// Move the viewer away (larger distance).
    ZoomOut,
    /// Stop the frame loop at the next frame boundary.
    Quit,
}

/// Clamp range and step for the viewer distance.
///
/// Limits are expected to come from a configuration that passed
/// [`RenderConfig::validate`](crate::RenderConfig::validate). Inverted or
/// NaN bounds do not panic: the upper bound wins and NaN bounds are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl DistanceLimits {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, distance: f64) -> f64 {
        distance.max(self.min).min(self.max)
    }
}

impl Default for DistanceLimits {
    fn default() -> Self {
        Self::new(1.0, 100.0, 0.5)
    }
}

/// Rotation angles plus viewer distance, owned by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub rotation: RotationState,
    viewer_distance: f64,
    limits: DistanceLimits,
}

impl RenderState {
    /// Start at zero rotation; `initial_distance` is clamped into `limits`.
    pub fn new(initial_distance: f64, limits: DistanceLimits) -> Self {
        Self {
            rotation: RotationState::zero(),
            viewer_distance: limits.clamp(initial_distance),
            limits,
        }
    }

    pub fn viewer_distance(&self) -> f64 {
        self.viewer_distance
    }

    pub fn limits(&self) -> &DistanceLimits {
        &self.limits
    }

    /// Apply a zoom event. Returns `false` for events that do not touch the
    /// state (`Quit`).
    pub fn apply(&mut self, event: InputEvent) -> bool {
        let delta = match event {
            InputEvent::ZoomIn => -self.limits.step,
            InputEvent::ZoomOut => self.limits.step,
            InputEvent::Quit => return false,
        };
        self.viewer_distance = self.limits.clamp(self.viewer_distance + delta);
        true
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(35.0, DistanceLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let mut state = RenderState::default();
        assert_eq!(state.viewer_distance(), 35.0);

        assert!(state.apply(InputEvent::ZoomIn));
        assert_eq!(state.viewer_distance(), 34.5);
        state.apply(InputEvent::ZoomOut);
        state.apply(InputEvent::ZoomOut);
        assert_eq!(state.viewer_distance(), 35.5);
    }

    #[test]
    fn test_distance_saturates_at_limits() {
        let mut state = RenderState::new(3.0, DistanceLimits::new(1.0, 100.0, 0.5));
        for _ in 0..50 {
            state.apply(InputEvent::ZoomIn);
        }
        assert_eq!(state.viewer_distance(), 1.0);

        for _ in 0..500 {
            state.apply(InputEvent::ZoomOut);
        }
        assert_eq!(state.viewer_distance(), 100.0);
    }

    #[test]
    fn test_overshooting_step_clamps() {
        let mut state = RenderState::new(99.8, DistanceLimits::new(1.0, 100.0, 0.5));
        state.apply(InputEvent::ZoomOut);
        assert_eq!(state.viewer_distance(), 100.0);
    }

    #[test]
    fn test_initial_distance_is_clamped() {
        let state = RenderState::new(500.0, DistanceLimits::new(1.0, 100.0, 0.5));
        assert_eq!(state.viewer_distance(), 100.0);
    }

    #[test]
    fn test_quit_leaves_state_alone() {
        let mut state = RenderState::default();
        let before = state;
        assert!(!state.apply(InputEvent::Quit));
        assert_eq!(state, before);
    }

    #[test]
    fn test_clamp_tolerates_bad_limits() {
        let inverted = DistanceLimits::new(10.0, 5.0, 0.5);
        assert_eq!(inverted.clamp(7.0), 5.0);

        let nan = DistanceLimits::new(f64::NAN, f64::NAN, 0.5);
        assert_eq!(nan.clamp(7.0), 7.0);

        let mut state = RenderState::new(7.0, inverted);
        state.apply(InputEvent::ZoomIn);
        assert_eq!(state.viewer_distance(), 5.0);
    }
}
