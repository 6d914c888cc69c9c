//! Starband Render Library
//!
//! Backends for the core's [`RenderTarget`](starband_core::RenderTarget)
//! seam: a recording display list (inspectable, handy for host compositors
//! and for asserting frame contents in tests) and an SVG document writer
//! that realizes solid and gradient fill treatments.

mod display_list;
mod renderer;
mod svg;

pub use display_list::{DisplayList, DrawCommand};
pub use renderer::{gradient_axis, polygon_bounds, RenderResult, RendererError};
pub use svg::SvgRenderer;
