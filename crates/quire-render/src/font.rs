//! Font faces as the renderer sees them.
//!
//! A [`FontFace`] is a font at one pixel size: it can measure a word, report
//! its ascent and line height, and draw a word into a pixel buffer. A
//! [`FontSource`] hands out faces for a requested size.
//!
//! Faces are treated as immutable for the duration of a render.

use std::path::PathBuf;

use image::RgbaImage;
use quire_css::ColorValue;
use thiserror::Error;

use crate::canvas;
use crate::fixed::{Fixed, FixedPoint};

/// A font at a fixed pixel size.
pub trait FontFace {
    /// The advance width of `word`.
    ///
    /// Must equal the advance returned by [`FontFace::draw`] for the same
    /// word, so that measurement and paint agree.
    fn measure(&self, word: &str) -> Fixed;

    /// Distance from the top of a line to its baseline.
    fn ascent(&self) -> Fixed;

    /// Distance between consecutive baselines.
    fn line_height(&self) -> Fixed;

    /// Draw `word` with its baseline origin at `origin` and return the pen
    /// advance.
    fn draw(&self, dst: &mut RgbaImage, word: &str, origin: FixedPoint, color: ColorValue)
    -> Fixed;
}

/// Hands out font faces by pixel size.
pub trait FontSource {
    /// The face to use for text at `size_px`.
    fn face(&self, size_px: i32) -> Box<dyn FontFace + '_>;
}

/// Errors from loading font data.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font '{}': {source}", .path.display())]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The font data could not be parsed.
    #[error("failed to parse font '{origin}': {reason}")]
    Parse {
        /// Where the data came from.
        origin: String,
        /// The parser's explanation.
        reason: &'static str,
    },

    /// None of the well-known system font paths held a usable font.
    #[error("no system font found ({} paths searched)", .searched.len())]
    NotFound {
        /// Every path that was tried.
        searched: Vec<String>,
    },
}

/// Font faces built from fixed ratios instead of font data.
///
/// The average advance width of Latin glyphs in a proportional font is
/// approximately 0.6× the font size; ascent is taken as 0.8× and line height
/// as 1.2×. Every non-control character has the same advance, and glyphs are
/// drawn as solid boxes.
///
/// This is used as a fallback when no font is available, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateSource;

impl FontSource for ApproximateSource {
    fn face(&self, size_px: i32) -> Box<dyn FontFace + '_> {
        Box::new(ApproximateFace::new(size_px))
    }
}

/// A face from [`ApproximateSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateFace {
    size_px: i32,
}

impl ApproximateFace {
    /// A face for `size_px` (negative sizes are treated as 0).
    #[must_use]
    pub fn new(size_px: i32) -> Self {
        Self {
            size_px: size_px.max(0),
        }
    }

    /// The advance of every glyph: 3/5 of the size.
    #[must_use]
    pub fn advance(&self) -> Fixed {
        Fixed::from_ratio(self.size_px, 3, 5)
    }
}

impl FontFace for ApproximateFace {
    fn measure(&self, word: &str) -> Fixed {
        word.chars()
            .filter(|ch| !ch.is_control())
            .map(|_| self.advance())
            .sum()
    }

    fn ascent(&self) -> Fixed {
        Fixed::from_ratio(self.size_px, 4, 5)
    }

    fn line_height(&self) -> Fixed {
        Fixed::from_ratio(self.size_px, 6, 5)
    }

    fn draw(
        &self,
        dst: &mut RgbaImage,
        word: &str,
        origin: FixedPoint,
        color: ColorValue,
    ) -> Fixed {
        let baseline = origin.y.to_px();
        let top = baseline.saturating_sub(self.ascent().to_px());
        let mut pen = origin.x;
        for ch in word.chars().filter(|ch| !ch.is_control()) {
            let next = pen + self.advance();
            if !ch.is_whitespace() {
                // Leave a 1px gap on each side so adjacent glyphs stay distinct.
                let left = pen.to_px().saturating_add(1);
                let right = next.to_px().saturating_sub(1);
                canvas::fill_rect_over(
                    dst,
                    left,
                    top,
                    right.saturating_sub(left),
                    baseline.saturating_sub(top),
                    color,
                );
            }
            pen = next;
        }
        pen - origin.x
    }
}
