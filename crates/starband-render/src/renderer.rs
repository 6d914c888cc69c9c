//! Shared renderer plumbing: errors and gradient geometry.

use kurbo::{Point, Rect};
use starband_core::GradientDirection;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("render failed: {0}")]
    RenderFailed(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Axis-aligned bounding box of a vertex list.
///
/// An empty list yields a zero rect; backends treat that as nothing to draw.
pub fn polygon_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points.iter().fold(
        Rect::new(first.x, first.y, first.x, first.y),
        |bounds, point| {
            Rect::new(
                bounds.x0.min(point.x),
                bounds.y0.min(point.y),
                bounds.x1.max(point.x),
                bounds.y1.max(point.y),
            )
        },
    )
}

/// Start and end points of a linear gradient spanning `bounds`.
pub fn gradient_axis(direction: GradientDirection, bounds: Rect) -> (Point, Point) {
    match direction {
        GradientDirection::Horizontal => (
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x1, bounds.y0),
        ),
        GradientDirection::Vertical => (
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x0, bounds.y1),
        ),
        GradientDirection::ForwardDiagonal => (
            Point::new(bounds.x0, bounds.y0),
            Point::new(bounds.x1, bounds.y1),
        ),
        GradientDirection::BackwardDiagonal => (
            Point::new(bounds.x1, bounds.y0),
            Point::new(bounds.x0, bounds.y1),
        ),
    }
}
