/// Character grid and integer line rasterization
use std::fmt;

use crate::projection::ScreenPoint;

/// One rendered frame: `height` rows of `width` characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    fill: char,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            height,
            fill,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn fill(&self) -> char {
        self.fill
    }

    /// Reset every cell to the fill character.
    pub fn clear(&mut self) {
        self.cells.fill(self.fill);
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Set a cell; coordinates outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on a zero chunk size.
        self.cells.chunks_exact(self.width.max(1)).take(self.height)
    }

    pub fn row_string(&self, y: usize) -> Option<String> {
        self.rows().nth(y).map(|row| row.iter().collect())
    }

    /// Number of cells holding something other than the fill character.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.fill).count()
    }

    /// Inclusive `(min, max)` corners of the lit cells, if any.
    pub fn bounding_box(&self) -> Option<(ScreenPoint, ScreenPoint)> {
        let mut bounds: Option<(ScreenPoint, ScreenPoint)> = None;
        for (i, &c) in self.cells.iter().enumerate() {
            if c == self.fill {
                continue;
            }
            let p = ScreenPoint::new((i % self.width) as i32, (i / self.width) as i32);
            bounds = Some(match bounds {
                None => (p, p),
                Some((lo, hi)) => (
                    ScreenPoint::new(lo.x.min(p.x), lo.y.min(p.y)),
                    ScreenPoint::new(hi.x.max(p.x), hi.y.max(p.y)),
                ),
            });
        }
        bounds
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Cells visited by the Bresenham walk from `from` to `to`, both inclusive.
///
/// The walk is unclipped and direction sensitive: where the error term ties,
/// walking the other way can pick a different cell. [`draw_line`] fixes the
/// direction before walking.
pub fn line_points(from: ScreenPoint, to: ScreenPoint) -> LinePoints {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    LinePoints {
        from,
        sx: if from.x < to.x { 1 } else { -1 },
        sy: if from.y < to.y { 1 } else { -1 },
        major,
        minor,
        x_major,
        next: 0,
        last: major,
    }
}

/// Iterator returned by [`line_points`].
///
/// The major axis advances one cell per step, so step `k` is computed
/// directly from the error-term recurrence instead of replaying it.
#[derive(Debug, Clone)]
pub struct LinePoints {
    from: ScreenPoint,
    sx: i64,
    sy: i64,
    major: i64,
    minor: i64,
    x_major: bool,
    next: i64,
    last: i64,
}

impl LinePoints {
    /// Minor-axis offset after `k` major steps:
    /// `max(0, ceil((2k * minor - major) / (2 * major)))`.
    fn minor_offset(&self, k: i64) -> i64 {
        if self.major == 0 {
            return 0;
        }
        let num = 2 * i128::from(k) * i128::from(self.minor) - i128::from(self.major);
        let den = 2 * i128::from(self.major);
        let ceil = -((-num).div_euclid(den));
        // Bounded by `minor`, which fits in i64.
        ceil.max(0) as i64
    }

    fn point_at(&self, k: i64) -> ScreenPoint {
        let m = self.minor_offset(k);
        let (ox, oy) = if self.x_major { (k, m) } else { (m, k) };
        // Every cell lies between the two i32 endpoints.
        ScreenPoint::new(
            (i64::from(self.from.x) + self.sx * ox) as i32,
            (i64::from(self.from.y) + self.sy * oy) as i32,
        )
    }

    /// Drop the steps whose major-axis coordinate falls outside
    /// `0..width` x `0..height`. The remaining cells are unchanged.
    pub fn clip(mut self, width: usize, height: usize) -> Self {
        let (origin, sign, size) = if self.x_major {
            (i64::from(self.from.x), self.sx, width)
        } else {
            (i64::from(self.from.y), self.sy, height)
        };
        let size = i64::try_from(size).unwrap_or(i64::MAX);
        let (lo, hi) = if sign > 0 {
            (-origin, (size - 1).saturating_sub(origin))
        } else {
            (origin.saturating_sub(size - 1), origin)
        };
        self.next = self.next.max(lo);
        self.last = self.last.min(hi);
        self
    }
}

impl Iterator for LinePoints {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.next > self.last {
            return None;
        }
        let point = self.point_at(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from((self.last - self.next + 1).max(0)).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

/// Draw a line between two grid points, inclusive of both ends.
///
/// Always walks from the lexicographically smaller `(x, y)` endpoint, so
/// swapping `from` and `to` touches the same cells. Only the part of the
/// line that crosses the grid is walked; cells outside it are skipped.
pub fn draw_line(grid: &mut Grid, from: ScreenPoint, to: ScreenPoint, ch: char) {
    let (start, end) = if (from.x, from.y) <= (to.x, to.y) {
        (from, to)
    } else {
        (to, from)
    };
    for p in line_points(start, end).clip(grid.width(), grid.height()) {
        grid.set(p.x, p.y, ch);
    }
}
