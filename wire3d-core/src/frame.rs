/// Frame building: transform, project and rasterize the wireframe
use log::debug;

use crate::geometry::Wireframe;
use crate::projection::{Camera, ScreenPoint};
use crate::raster::{draw_line, Grid};
use crate::state::RenderState;
use crate::transform::rotate_xyz;

/// Turns a [`RenderState`] into a finished [`Grid`].
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    wireframe: Wireframe,
    camera: Camera,
    draw_char: char,
    fill_char: char,
}

impl FrameBuilder {
    pub fn new(wireframe: Wireframe, camera: Camera, draw_char: char, fill_char: char) -> Self {
        Self {
            wireframe,
            camera,
            draw_char,
            fill_char,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    /// Build a frame into a freshly allocated grid.
    pub fn build(&self, state: &RenderState) -> Grid {
        let mut grid = Grid::new(self.camera.width, self.camera.height, self.fill_char);
        self.draw(state, &mut grid);
        grid
    }

    /// Clear `grid` and build the frame into it.
    ///
    /// `grid` must have the camera's dimensions; a mismatched grid is
    /// replaced.
    pub fn build_into(&self, state: &RenderState, grid: &mut Grid) {
        if grid.width() != self.camera.width
            || grid.height() != self.camera.height
            || grid.fill() != self.fill_char
        {
            *grid = Grid::new(self.camera.width, self.camera.height, self.fill_char);
        } else {
            grid.clear();
        }
        self.draw(state, grid);
    }

    /// Rotated and projected vertices, in vertex-table order.
    ///
    /// `None` marks a vertex whose projection is degenerate this frame.
    pub fn project_vertices(&self, state: &RenderState) -> Vec<Option<ScreenPoint>> {
        self.wireframe
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, vertex)| {
                let rotated = rotate_xyz(*vertex, &state.rotation);
                match self.camera.project(&rotated, state.viewer_distance()) {
                    Ok(point) => Some(point),
                    Err(err) => {
                        debug!("vertex {i} skipped: {err}");
                        None
                    }
                }
            })
            .collect()
    }

    fn draw(&self, state: &RenderState, grid: &mut Grid) {
        let projected = self.project_vertices(state);
        for &[a, b] in self.wireframe.edges() {
            if let (Some(from), Some(to)) = (projected[a], projected[b]) {
                draw_line(grid, from, to, self.draw_char);
            }
        }
    }
}
