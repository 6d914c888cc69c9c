//! Drawing seam between the widget core and a rendering backend.

use kurbo::Point;
use peniko::Color;

use crate::appearance::FillTreatment;

/// Drawing primitives the widget needs from a backend.
///
/// The core hands over vertex lists and opaque fill descriptors and stays
/// agnostic to the underlying drawing API. Implementations live in
/// `starband-render` (or in the host application).
pub trait RenderTarget {
    /// Clear the whole surface to `color`.
    fn clear(&mut self, color: Color);

    /// Fill a closed polygon with the given treatment.
    fn fill_polygon(&mut self, points: &[Point], fill: &FillTreatment);

    /// Stroke a closed polygon outline.
    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64);
}
