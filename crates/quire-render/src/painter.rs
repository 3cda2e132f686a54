//! Software painter.
//!
//! Each box is painted into its own buffer sized by [`Layout`]: the
//! background is filled, then children are painted in sibling order with a
//! pen that starts at the top-left corner. Text flows word by word through
//! [`TextFlow`]; element children are painted recursively against this
//! box's width and composited at the pen. Non-inline children stack below
//! the pen line; inline children sit to the right of it.

#[cfg(feature = "paint-trace")]
use std::cell::Cell;

use image::RgbaImage;
use quire_css::DisplayType;
use quire_dom::{NodeId, NodeType};

use crate::canvas;
use crate::error::RenderError;
use crate::fixed::FixedPoint;
use crate::font::FontSource;
use crate::geometry::Layout;
use crate::metrics::{Pen, TextFlow};
use crate::options::RenderOptions;
use crate::tree::RenderTree;

#[cfg(feature = "paint-trace")]
thread_local! {
    static PAINT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Paints nodes of a [`RenderTree`] into pixel buffers.
pub struct Painter<'a> {
    layout: Layout<'a>,
    options: RenderOptions,
}

impl<'a> Painter<'a> {
    /// A painter with default [`RenderOptions`].
    #[must_use]
    pub fn new(tree: &'a RenderTree, fonts: &'a dyn FontSource) -> Self {
        Self::with_options(tree, fonts, RenderOptions::default())
    }

    /// A painter with explicit options.
    #[must_use]
    pub fn with_options(
        tree: &'a RenderTree,
        fonts: &'a dyn FontSource,
        options: RenderOptions,
    ) -> Self {
        Self {
            layout: Layout::new(tree, fonts),
            options,
        }
    }

    /// The resolver, carrying the overrides of the last render.
    #[must_use]
    pub const fn layout(&self) -> &Layout<'a> {
        &self.layout
    }

    /// The font size of `id` as the last render used it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Style`] for a malformed cascaded font size.
    pub fn font_size(&self, id: NodeId) -> Result<i32, RenderError> {
        self.layout.font_size(id)
    }

    /// Render `id` into a buffer `width(id) × height(id)` pixels large.
    ///
    /// Headings in the subtree are enlarged first, see
    /// [`Layout::override_headings`]. The overrides last until the next call
    /// and never touch the tree's style handles.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingNode`] if `id` is not in the tree, and
    /// [`RenderError::Style`] if a font size in the subtree is malformed.
    pub fn render(&mut self, id: NodeId, container_width: i32) -> Result<RgbaImage, RenderError> {
        if self.layout.tree().dom().get(id).is_none() {
            return Err(RenderError::MissingNode(id));
        }

        self.layout.override_headings(id);
        self.render_box(id, container_width.max(0))
    }

    fn render_box(&self, id: NodeId, container_width: i32) -> Result<RgbaImage, RenderError> {
        let width = self.layout.width(id, container_width)?;
        let height = self.layout.height(id, container_width)?.px.max(0);

        #[cfg(feature = "paint-trace")]
        let _depth = {
            let display = self.layout.display_type(id)?;
            let depth = PAINT_DEPTH.with(|d| {
                let current = d.get();
                d.set(current + 1);
                current
            });
            eprintln!(
                "[PAINT] {:indent$}{id:?} {} display={} size={width}x{height}",
                "",
                self.layout.tree().dom().tag_name(id).unwrap_or("#text"),
                display,
                indent = depth * 2,
            );
            TraceGuard
        };

        let mut buffer = canvas::new_canvas(width, height);
        canvas::fill(&mut buffer, self.layout.background_color(id));
        if self.options.debug_borders {
            canvas::draw_border_overlay(
                &mut buffer,
                self.options.border_width,
                self.options.border_color,
            );
        }

        let dom = self.layout.tree().dom();
        let mut pen = Pen::default();
        if let Some(text) = dom.as_text(id) {
            self.flow_text(&mut buffer, id, text, &mut pen, container_width)?;
            return Ok(buffer);
        }

        for &child in dom.children(id) {
            match dom.get(child).map(|node| &node.node_type) {
                Some(NodeType::Text(text)) => {
                    self.flow_text(&mut buffer, child, text, &mut pen, width)?;
                }
                Some(NodeType::Element(_)) => {
                    let child_buffer = self.render_box(child, width)?;
                    canvas::composite_over(&mut buffer, &child_buffer, pen.x, pen.y);
                    let (child_width, child_height) = dimensions(&child_buffer);
                    if self.layout.display_type(child)? == DisplayType::Inline {
                        pen.x = pen.x.saturating_add(child_width);
                    } else {
                        pen.x = 0;
                        pen.y = pen.y.saturating_add(child_height);
                    }
                }
                _ => {}
            }
        }
        Ok(buffer)
    }

    /// Draw the words of text node `id`, breaking lines at `wrap_width`.
    fn flow_text(
        &self,
        buffer: &mut RgbaImage,
        id: NodeId,
        text: &str,
        pen: &mut Pen,
        wrap_width: i32,
    ) -> Result<(), RenderError> {
        let size = self.layout.font_size(id)?;
        let color = self.layout.color(id);
        let face = self.layout.fonts().face(size);
        let ascent = face.ascent().to_px();
        let _breaks = TextFlow::new(face.as_ref(), size)
            .wrapping_at(wrap_width)
            .run(text, pen, |word, at| {
                let origin = FixedPoint::from_px(at.x, at.y.saturating_add(ascent));
                face.draw(buffer, word, origin, color)
            });
        Ok(())
    }
}

#[allow(clippy::cast_possible_wrap)]
fn dimensions(buffer: &RgbaImage) -> (i32, i32) {
    let (width, height) = buffer.dimensions();
    (width as i32, height as i32)
}

#[cfg(feature = "paint-trace")]
struct TraceGuard;

#[cfg(feature = "paint-trace")]
impl Drop for TraceGuard {
    fn drop(&mut self) {
        PAINT_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
