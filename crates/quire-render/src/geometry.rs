//! Box geometry: font size, color and display resolution, and the width and
//! height of every box for a given container width.
//!
//! Geometry is recomputed on every call. Nothing is cached on the tree, so a
//! result always reflects the container width it was asked for.

use std::collections::HashMap;

use quire_common::warning::warn_once;
use quire_css::{Cascaded, ColorValue, DEFAULT_FONT_SIZE_PX, DisplayType, StyledElement};
use quire_dom::{NodeId, NodeType};

use crate::error::RenderError;
use crate::font::FontSource;
use crate::metrics::{line_count, measure_text};
use crate::tree::RenderTree;

/// Background used when nothing in the cascade sets one: a fully
/// transparent cyan, so it never shows but is distinguishable in dumps.
pub const DEFAULT_BACKGROUND: ColorValue = ColorValue::rgba(0x00, 0xE0, 0xE0, 0x00);

/// Font size forced onto `h1` headings and their direct children.
pub const HEADING_FONT_SIZE_PX: i32 = 2 * DEFAULT_FONT_SIZE_PX;

/// Per-render font size overrides, keyed by node. An override shadows the
/// node's cascaded font size and is inherited by its descendants.
pub type FontOverrides = HashMap<NodeId, i32>;

/// Where a box height came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightSource {
    /// An explicit `height` in the cascade.
    Explicit,
    /// The summed heights of the children, or the lines of a text node.
    Content,
    /// No content; the node's own font size was used as a guess.
    FontSize,
    /// No content and no styles at all. The height is 0.
    Unstyled,
}

/// A resolved box height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height {
    /// Height in whole pixels, never negative.
    pub px: i32,
    /// How `px` was derived.
    pub source: HeightSource,
}

impl Height {
    const fn new(px: i32, source: HeightSource) -> Self {
        Self { px, source }
    }
}

/// Resolves sizes and cascaded values over a [`RenderTree`].
pub struct Layout<'a> {
    tree: &'a RenderTree,
    fonts: &'a dyn FontSource,
    overrides: FontOverrides,
}

impl<'a> Layout<'a> {
    /// A resolver with no font size overrides.
    #[must_use]
    pub fn new(tree: &'a RenderTree, fonts: &'a dyn FontSource) -> Self {
        Self {
            tree,
            fonts,
            overrides: FontOverrides::new(),
        }
    }

    /// The tree being laid out.
    #[must_use]
    pub const fn tree(&self) -> &'a RenderTree {
        self.tree
    }

    /// The font source faces are drawn from.
    #[must_use]
    pub const fn fonts(&self) -> &'a dyn FontSource {
        self.fonts
    }

    /// Force the font size of `id` to `px` for subsequent lookups.
    pub fn set_override(&mut self, id: NodeId, px: i32) {
        let _previous = self.overrides.insert(id, px);
    }

    /// Drop every override.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Replace all overrides with the heading rule for the subtree at
    /// `root`: every `h1`, and each of its direct children, is set to
    /// [`HEADING_FONT_SIZE_PX`]. Nodes outside those are untouched.
    pub fn override_headings(&mut self, root: NodeId) {
        self.clear_overrides();
        let tree = self.tree;
        let dom = tree.dom();
        let headings = dom
            .elements(root)
            .filter(|&id| dom.as_element(id).is_some_and(|data| data.is("h1")));
        for heading in headings {
            self.set_override(heading, HEADING_FONT_SIZE_PX);
            for &child in dom.children(heading) {
                self.set_override(child, HEADING_FONT_SIZE_PX);
            }
        }
    }

    /// The overrides currently in effect.
    #[must_use]
    pub const fn overrides(&self) -> &FontOverrides {
        &self.overrides
    }

    fn styles(&self, id: NodeId) -> Option<&'a StyledElement> {
        self.tree.styles(id)
    }

    fn node_type(&self, id: NodeId) -> Result<&'a NodeType, RenderError> {
        self.tree
            .dom()
            .get(id)
            .map(|node| &node.node_type)
            .ok_or(RenderError::MissingNode(id))
    }

    /// The node and its ancestors, nearest first.
    fn self_and_ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + 'a {
        std::iter::once(id).chain(self.tree.dom().ancestors(id))
    }

    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// The node's own cascaded size; `inherit` or no value defers to the
    /// parent, and the root falls back to [`DEFAULT_FONT_SIZE_PX`].
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Style`] if a node on the way up holds a
    /// malformed font size.
    pub fn font_size(&self, id: NodeId) -> Result<i32, RenderError> {
        for node in self.self_and_ancestors(id) {
            if let Some(&px) = self.overrides.get(&node) {
                return Ok(px);
            }
            if let Some(styles) = self.styles(node)
                && let Cascaded::Value(px) = styles.font_size()?
            {
                return Ok(px);
            }
        }
        Ok(DEFAULT_FONT_SIZE_PX)
    }

    /// [§ 2 'display'](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// Text is always inline and the document is a block. Elements use
    /// their cascaded value, defaulting to block; keywords other than the
    /// known ones are reported once and stack like blocks without taking
    /// the full width. Comments are never displayed.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingNode`] if `id` is not in the tree.
    pub fn display_type(&self, id: NodeId) -> Result<DisplayType, RenderError> {
        Ok(match self.node_type(id)? {
            NodeType::Text(_) => DisplayType::Inline,
            NodeType::Document => DisplayType::Block,
            NodeType::Comment(_) => DisplayType::Hidden,
            NodeType::Element(_) => {
                let display = self
                    .styles(id)
                    .and_then(StyledElement::display_type)
                    .unwrap_or(DisplayType::Block);
                if let DisplayType::Other(keyword) = &display {
                    warn_once(
                        "Layout",
                        &format!("display: {keyword} is not supported, stacking as a block"),
                    );
                }
                display
            }
        })
    }

    /// [§ 3.2 'background-color'](https://www.w3.org/TR/css-backgrounds-3/#background-color)
    ///
    /// `inherit` walks up the tree; a node with no value, or running off the
    /// root, yields [`DEFAULT_BACKGROUND`].
    #[must_use]
    pub fn background_color(&self, id: NodeId) -> ColorValue {
        for node in self.self_and_ancestors(id) {
            let Some(styles) = self.styles(node) else {
                return DEFAULT_BACKGROUND;
            };
            match styles.background_color(DEFAULT_BACKGROUND) {
                Cascaded::Value(color) => return color,
                Cascaded::Inherit => {}
                Cascaded::NoStyles => return DEFAULT_BACKGROUND,
            }
        }
        DEFAULT_BACKGROUND
    }

    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    ///
    /// Text takes its own color if set, else its parent's. Elements default
    /// to black, except links which default to blue.
    #[must_use]
    pub fn color(&self, id: NodeId) -> ColorValue {
        let dom = self.tree.dom();
        let default = match dom.get(id).map(|node| &node.node_type) {
            Some(NodeType::Text(_)) => dom
                .parent(id)
                .map_or(ColorValue::BLACK, |parent| self.color(parent)),
            Some(NodeType::Element(data)) if data.is("a") => ColorValue::BLUE,
            _ => ColorValue::BLACK,
        };
        self.styles(id)
            .map_or(default, |styles| styles.color(default))
    }

    /// The box height of `id` inside a container `container_width` wide.
    ///
    /// 1. An explicit cascaded `height` wins outright.
    /// 2. Otherwise the content height: for text, the wrapped line count
    ///    times the font size; for elements, the sum of the children's
    ///    heights against this node's own width, each raised to at least
    ///    the child's font size.
    /// 3. With no content, a styled node guesses its own font size and an
    ///    unstyled one reports 0.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] for a missing node or a malformed font size.
    pub fn height(&self, id: NodeId, container_width: i32) -> Result<Height, RenderError> {
        let container_width = container_width.max(0);
        let styles = self.styles(id);
        if let Some(px) = styles.and_then(|s| s.pixel_length("height")) {
            return Ok(Height::new(px, HeightSource::Explicit));
        }

        let content = match self.node_type(id)? {
            NodeType::Text(text) => {
                let size = self.font_size(id)?;
                let face = self.fonts.face(size);
                let lines = line_count(face.as_ref(), text, container_width);
                i32::try_from(lines)
                    .unwrap_or(i32::MAX)
                    .saturating_mul(size)
            }
            NodeType::Comment(_) => 0,
            NodeType::Element(_) | NodeType::Document => {
                let own_width = self.width(id, container_width)?;
                let mut sum = 0i32;
                for &child in self.tree.dom().children(id) {
                    if !self.is_box(child) {
                        continue;
                    }
                    let child_height = self.height(child, own_width)?.px;
                    sum = sum.saturating_add(child_height.max(self.font_size(child)?));
                }
                sum
            }
        };
        if content > 0 {
            return Ok(Height::new(content, HeightSource::Content));
        }

        if styles.is_none_or(StyledElement::is_empty) {
            Ok(Height::new(0, HeightSource::Unstyled))
        } else {
            Ok(Height::new(self.font_size(id)?, HeightSource::FontSize))
        }
    }

    /// The box width of `id` inside a container `container_width` wide.
    ///
    /// Blocks take the whole container. Text takes its measured width.
    /// Other elements take their widest child, or the whole container if
    /// that is 0.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] for a missing node or a malformed font size.
    pub fn width(&self, id: NodeId, container_width: i32) -> Result<i32, RenderError> {
        let container_width = container_width.max(0);
        if self.display_type(id)?.is_block() {
            return Ok(container_width);
        }
        if let NodeType::Text(text) = self.node_type(id)? {
            let face = self.fonts.face(self.font_size(id)?);
            return Ok(measure_text(face.as_ref(), text));
        }

        let mut widest = 0;
        for &child in self.tree.dom().children(id) {
            if self.is_box(child) {
                widest = widest.max(self.width(child, container_width)?);
            }
        }
        Ok(if widest > 0 { widest } else { container_width })
    }

    /// Whether `id` generates a box: elements and text do, comments don't.
    #[must_use]
    pub fn is_box(&self, id: NodeId) -> bool {
        let dom = self.tree.dom();
        dom.is_element(id) || dom.is_text(id)
    }
}
