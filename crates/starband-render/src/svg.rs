//! SVG document backend.
//!
//! Produces a standalone SVG frame from the widget's draw calls. Gradient
//! treatments become `<linearGradient>` defs with their axis spanning the
//! polygon's bounding box, so the output matches what a raster backend
//! would paint.

use std::fmt::Write as _;
use std::io::Write;

use kurbo::{Point, Size};
use peniko::Color;
use starband_core::{FillTreatment, RenderTarget};

use crate::renderer::{gradient_axis, polygon_bounds, RenderResult};

/// A render target that writes an SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: Size,
    background: Option<Color>,
    defs: String,
    body: String,
    gradients: usize,
}

impl SvgRenderer {
    /// Create a renderer for a surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            defs: String::new(),
            body: String::new(),
            gradients: 0,
        }
    }

    fn document(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
            self.size.width, self.size.height, self.size.width, self.size.height
        );
        if !self.defs.is_empty() {
            let _ = write!(svg, "<defs>\n{}</defs>\n", self.defs);
        }
        if let Some(background) = self.background {
            let _ = writeln!(
                svg,
                "<rect width=\"100%\" height=\"100%\" fill=\"{}\" fill-opacity=\"{}\"/>",
                rgb(background),
                alpha(background)
            );
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Consume the renderer and return the finished document.
    pub fn finish(self) -> String {
        self.document()
    }

    /// Write the current document to an output stream.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> RenderResult<()> {
        writer.write_all(self.document().as_bytes())?;
        Ok(())
    }
}

impl RenderTarget for SvgRenderer {
    fn clear(&mut self, color: Color) {
        self.background = Some(color);
        self.defs.clear();
        self.body.clear();
        self.gradients = 0;
    }

    fn fill_polygon(&mut self, points: &[Point], fill: &FillTreatment) {
        if points.is_empty() {
            return;
        }
        let paint = match fill {
            FillTreatment::Solid(color) => {
                format!("fill=\"{}\" fill-opacity=\"{}\"", rgb(*color), alpha(*color))
            }
            FillTreatment::Linear {
                start,
                end,
                direction,
            } => {
                let id = format!("grad{}", self.gradients);
                self.gradients += 1;
                let (from, to) = gradient_axis(*direction, polygon_bounds(points));
                let _ = writeln!(
                    self.defs,
                    "<linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
                     x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                    from.x, from.y, to.x, to.y
                );
                let _ = writeln!(
                    self.defs,
                    "<stop offset=\"0\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                    rgb(*start),
                    alpha(*start)
                );
                let _ = writeln!(
                    self.defs,
                    "<stop offset=\"1\" stop-color=\"{}\" stop-opacity=\"{}\"/>",
                    rgb(*end),
                    alpha(*end)
                );
                self.defs.push_str("</linearGradient>\n");
                format!("fill=\"url(#{id})\"")
            }
        };
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" {}/>",
            points_attr(points),
            paint
        );
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color, width: f64) {
        if points.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" \
             stroke-width=\"{}\" stroke-linejoin=\"round\"/>",
            points_attr(points),
            rgb(color),
            alpha(color),
            width
        );
    }
}

fn rgb(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("rgb({},{},{})", rgba.r, rgba.g, rgba.b)
}

fn alpha(color: Color) -> f64 {
    f64::from(color.to_rgba8().a) / 255.0
}

fn points_attr(points: &[Point]) -> String {
    let mut attr = String::new();
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        let _ = write!(attr, "{},{}", point.x, point.y);
    }
    attr
}
