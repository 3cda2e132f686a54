//! Box geometry, text flow and software painting for the Quire renderer.
//!
//! # Architecture
//!
//! ```text
//! StyledElement → Layout (geometry) → Painter → RgbaImage
//!                      ↑                  ↑
//!                  TextFlow ←──────── FontFace
//! ```
//!
//! - [`Layout`] resolves font sizes, colors and display types through the
//!   cascade outcomes, and computes each node's width and height for a given
//!   container width.
//! - [`TextFlow`] is the single implementation of word placement and
//!   punctuation-aware spacing. Measurement, line counting and painting all
//!   go through it, so they agree bit-for-bit.
//! - [`Painter`] renders a node into a freshly allocated pixel buffer,
//!   recursing into element children and compositing their buffers.
//!
//! All glyph metrics are carried as 26.6 [`Fixed`] values and truncated to
//! whole pixels with an arithmetic shift.

pub mod canvas;
mod error;
pub mod fixed;
pub mod font;
pub mod fontdue_face;
pub mod geometry;
pub mod metrics;
pub mod options;
pub mod painter;
pub mod tree;

pub use error::RenderError;
pub use fixed::{Fixed, FixedPoint};
pub use font::{ApproximateFace, ApproximateSource, FontError, FontFace, FontSource};
pub use fontdue_face::{FONT_SEARCH_PATHS, FontdueFace, FontdueSource};
pub use geometry::{
    DEFAULT_BACKGROUND, FontOverrides, HEADING_FONT_SIZE_PX, Height, HeightSource, Layout,
};
pub use metrics::{Pen, TextFlow, line_count, measure_text, space_after};
pub use options::RenderOptions;
pub use painter::Painter;
pub use tree::RenderTree;

use image::RgbaImage;
use quire_dom::NodeId;

/// Render `node` and its subtree into a new buffer.
///
/// Convenience wrapper around [`Painter`] with default [`RenderOptions`].
///
/// # Errors
///
/// Returns [`RenderError`] if `node` does not exist or the cascade holds a
/// malformed value.
pub fn render(
    tree: &RenderTree,
    fonts: &dyn FontSource,
    node: NodeId,
    container_width: i32,
) -> Result<RgbaImage, RenderError> {
    Painter::new(tree, fonts).render(node, container_width)
}
