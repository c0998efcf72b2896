/// Render configuration, fixed for the lifetime of a frame loop
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::frame::FrameBuilder;
use crate::geometry::Wireframe;
use crate::pacer::Pacer;
use crate::projection::Camera;
use crate::state::{DistanceLimits, RenderState};

/// Constants the pipeline is built from.
///
/// Every field has a default, so a partial configuration file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Grid columns.
    pub width: usize,
    /// Grid rows.
    pub height: usize,
    pub target_fps: u32,
    /// Projection scale (not an angle).
    pub fov: f64,
    pub initial_distance: f64,
    pub min_distance: f64,
    pub max_distance: f64,
    /// Distance change per zoom key press.
    pub zoom_step: f64,
    /// Degrees added to each axis after every frame.
    pub rotation_step: f64,
    pub fill_char: char,
    pub draw_char: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 140,
            height: 70,
            target_fps: 30,
            fov: 256.0,
            initial_distance: 35.0,
            min_distance: 1.0,
            max_distance: 100.0,
            zoom_step: 0.5,
            rotation_step: 1.0,
            fill_char: ' ',
            draw_char: '*',
        }
    }
}

impl RenderConfig {
    /// Check ranges before any frame is built.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(Error::InvalidConfig(reason));

        if self.width == 0 || self.height == 0 {
            return invalid(format!("grid must be non-empty, got {}x{}", self.width, self.height));
        }
        if self.target_fps == 0 || self.target_fps > 1000 {
            return invalid(format!("target_fps must be in 1..=1000, got {}", self.target_fps));
        }
        let numbers = [
            ("fov", self.fov),
            ("initial_distance", self.initial_distance),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("zoom_step", self.zoom_step),
            ("rotation_step", self.rotation_step),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("{name} must be finite, got {value}"));
        }
        if self.min_distance > self.max_distance {
            return invalid(format!(
                "min_distance {} exceeds max_distance {}",
                self.min_distance, self.max_distance
            ));
        }
        if !(self.min_distance..=self.max_distance).contains(&self.initial_distance) {
            return invalid(format!(
                "initial_distance {} outside [{}, {}]",
                self.initial_distance, self.min_distance, self.max_distance
            ));
        }
        if self.zoom_step <= 0.0 {
            return invalid(format!("zoom_step must be positive, got {}", self.zoom_step));
        }
        if self.fill_char == self.draw_char {
            return invalid(format!("fill_char and draw_char are both {:?}", self.fill_char));
        }

        let extent = Wireframe::cube().extent();
        if self.min_distance <= extent {
            info!(
                "min_distance {} is within the model extent {:.3}; close zoom may hit degenerate projections",
                self.min_distance, extent
            );
        }
        Ok(())
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.fov)
    }

    pub fn limits(&self) -> DistanceLimits {
        DistanceLimits::new(self.min_distance, self.max_distance, self.zoom_step)
    }

    pub fn initial_state(&self) -> RenderState {
        RenderState::new(self.initial_distance, self.limits())
    }

    /// Whole-millisecond frame budget, `1000 / target_fps`.
    pub fn frame_duration(&self) -> Duration {
        self.pacer().target()
    }

    pub fn pacer(&self) -> Pacer {
        Pacer::from_fps(self.target_fps)
    }

    pub fn frame_builder(&self) -> FrameBuilder {
        FrameBuilder::new(Wireframe::cube(), self.camera(), self.draw_char, self.fill_char)
    }

    /// Copy with the grid resized, e.g. to fit a terminal.
    pub fn with_size(&self, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }
}
