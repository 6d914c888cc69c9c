//! Star polygon geometry.

use kurbo::{BezPath, Point, Rect};

/// Vertex table for the star silhouette, as (x, y) fractions of the bounding
/// rectangle. Clockwise from the top point. These ratios are the agreed
/// shape contract and must not be tweaked.
const STAR_FRACTIONS: [(f64, f64); 10] = [
    (32.0 / 64.0, 0.0),
    (42.0 / 64.0, 19.0 / 64.0),
    (64.0 / 64.0, 22.0 / 64.0),
    (48.0 / 64.0, 38.0 / 64.0),
    (52.0 / 64.0, 64.0 / 64.0),
    (32.0 / 64.0, 52.0 / 64.0),
    (12.0 / 64.0, 64.0 / 64.0),
    (16.0 / 64.0, 38.0 / 64.0),
    (0.0, 22.0 / 64.0),
    (22.0 / 64.0, 19.0 / 64.0),
];

/// A 10-vertex star inscribed in a slot rectangle.
///
/// Owned by the slot layout and recomputed alongside it; a polygon is never
/// kept alive past its layout epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPolygon {
    /// Vertices in draw order, starting at the top point.
    pub points: [Point; 10],
}

impl StarPolygon {
    /// Inscribe the star in `rect`.
    ///
    /// Degenerate rectangles (zero or negative extent) are tolerated and
    /// simply produce a collapsed or inverted star.
    pub fn from_rect(rect: Rect) -> Self {
        let w = rect.x1 - rect.x0;
        let h = rect.y1 - rect.y0;
        let points =
            STAR_FRACTIONS.map(|(fx, fy)| Point::new(rect.x0 + fx * w, rect.y0 + fy * h));
        Self { points }
    }

    /// The topmost vertex (horizontal center of the slot).
    pub fn top(&self) -> Point {
        self.points[0]
    }

    /// Get the closed path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for point in &self.points[1..] {
            path.line_to(*point);
        }
        path.close_path();
        path
    }
}
