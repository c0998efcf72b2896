/// Geometry primitives for wireframe rendering
use nalgebra::Point3;

/// A pair of indices into a wireframe's vertex table.
pub type Edge = [usize; 2];

/// Corners of the unit cube, centred on the origin.
pub const CUBE_VERTICES: [Point3<f64>; 8] = [
    Point3::new(-1.0, 1.0, -1.0),
    Point3::new(1.0, 1.0, -1.0),
    Point3::new(-1.0, -1.0, -1.0),
    Point3::new(1.0, -1.0, -1.0),
    Point3::new(-1.0, 1.0, 1.0),
    Point3::new(1.0, 1.0, 1.0),
    Point3::new(-1.0, -1.0, 1.0),
    Point3::new(1.0, -1.0, 1.0),
];

/// Cube edges: near face, far face, then the four connecting edges.
pub const CUBE_EDGES: [Edge; 12] = [
    [0, 1], [1, 3], [3, 2], [2, 0],
    [4, 5], [5, 7], [7, 6], [6, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// Fixed vertex/edge topology of a wireframe model.
///
/// Both tables are borrowed for `'static`, so the topology can never be
/// resized or reordered while a renderer holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wireframe {
    vertices: &'static [Point3<f64>],
    edges: &'static [Edge],
}

impl Wireframe {
    /// Build a wireframe from static tables.
    ///
    /// Panics if an edge references a vertex that does not exist; tables are
    /// compile-time constants, so this is a programming error.
    pub fn new(vertices: &'static [Point3<f64>], edges: &'static [Edge]) -> Self {
        for edge in edges {
            assert!(
                edge[0] < vertices.len() && edge[1] < vertices.len(),
                "edge {:?} out of range for {} vertices",
                edge,
                vertices.len()
            );
        }
        Self { vertices, edges }
    }

    /// The canonical unit cube (8 vertices, 12 edges).
    pub fn cube() -> Self {
        Self::new(&CUBE_VERTICES, &CUBE_EDGES)
    }

    pub fn vertices(&self) -> &'static [Point3<f64>] {
        self.vertices
    }

    pub fn edges(&self) -> &'static [Edge] {
        self.edges
    }

    /// Largest distance of any vertex from the origin.
    ///
    /// Rotation about the origin keeps every depth within `[-extent, extent]`.
    pub fn extent(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f64::max)
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::cube()
    }
}
