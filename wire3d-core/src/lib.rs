/// Wire3D Core Library - Shared geometry, rasterization and frame pacing
///
/// This library provides the side-effect free pipeline for the rotating
/// wireframe renderer: rotation and perspective projection, Bresenham line
/// drawing into a character grid, frame building, and the paced frame loop
/// that drives them through host-supplied input, output and clock traits.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod pacer;
pub mod projection;
pub mod state;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use frame::FrameBuilder;
pub use geometry::{Edge, Wireframe};
pub use pacer::{Clock, FrameLoop, FrameSink, FrameStats, InputSource, LoopControl, Pacer, SystemClock};
pub use projection::{Camera, ScreenPoint};
pub use raster::{draw_line, Grid};
pub use state::{DistanceLimits, InputEvent, RenderState};
pub use transform::RotationState;
