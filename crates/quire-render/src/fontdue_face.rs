//! Font faces backed by fontdue.
//!
//! Advances come from `Font::metrics()` so measuring never rasterizes; only
//! [`FontFace::draw`] generates glyph bitmaps.

use std::path::Path;

use fontdue::{Font, FontSettings};
use image::{Rgba, RgbaImage};
use quire_css::ColorValue;

use crate::canvas;
use crate::fixed::{Fixed, FixedPoint};
use crate::font::{FontError, FontFace, FontSource};

/// Common system font paths to search for a default (regular) font.
pub const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// A parsed font file that hands out [`FontdueFace`]s at any size.
pub struct FontdueSource {
    font: Font,
}

impl FontdueSource {
    /// Parse font data already in memory. `origin` names the data in errors.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if fontdue rejects the data.
    pub fn from_bytes(data: &[u8], origin: &str) -> Result<Self, FontError> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            FontError::Parse {
                origin: origin.to_string(),
                reason,
            }
        })?;
        Ok(Self { font })
    }

    /// Read and parse a font file.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Read`] if the file cannot be read and
    /// [`FontError::Parse`] if it is not a font fontdue understands.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&data, &path.display().to_string())
    }

    /// The first font in [`FONT_SEARCH_PATHS`] that loads.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::NotFound`] listing every path tried.
    pub fn system() -> Result<Self, FontError> {
        FONT_SEARCH_PATHS
            .iter()
            .find_map(|path| Self::load(Path::new(path)).ok())
            .ok_or_else(|| FontError::NotFound {
                searched: FONT_SEARCH_PATHS.iter().map(ToString::to_string).collect(),
            })
    }
}

impl FontSource for FontdueSource {
    #[allow(clippy::cast_precision_loss)]
    fn face(&self, size_px: i32) -> Box<dyn FontFace + '_> {
        Box::new(FontdueFace {
            font: &self.font,
            size: size_px.max(0) as f32,
        })
    }
}

/// A [`FontdueSource`] font at one pixel size.
pub struct FontdueFace<'a> {
    font: &'a Font,
    size: f32,
}

impl FontdueFace<'_> {
    fn advance(&self, ch: char) -> Fixed {
        Fixed::from_f32(self.font.metrics(ch, self.size).advance_width)
    }
}

impl FontFace for FontdueFace<'_> {
    fn measure(&self, word: &str) -> Fixed {
        word.chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| self.advance(ch))
            .sum()
    }

    fn ascent(&self) -> Fixed {
        self.font.horizontal_line_metrics(self.size).map_or_else(
            || Fixed::from_f32(self.size * 0.8),
            |line| Fixed::from_f32(line.ascent),
        )
    }

    fn line_height(&self) -> Fixed {
        // [§ 10.8.1](https://www.w3.org/TR/CSS2/visudet.html#leading)
        // "We recommend a used value for 'normal' between 1.0 and 1.2."
        self.font.horizontal_line_metrics(self.size).map_or_else(
            || Fixed::from_f32(self.size * 1.2),
            |line| Fixed::from_f32(line.new_line_size),
        )
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw(
        &self,
        dst: &mut RgbaImage,
        word: &str,
        origin: FixedPoint,
        color: ColorValue,
    ) -> Fixed {
        let rgba = Rgba(color.to_array());
        let baseline = origin.y.to_px();
        let mut pen = origin.x;
        for ch in word.chars().filter(|ch| !ch.is_control()) {
            let (metrics, bitmap) = self.font.rasterize(ch, self.size);
            // fontdue's ymin is the bitmap bottom's offset above the baseline.
            let glyph_x = pen.to_px().saturating_add(metrics.xmin);
            let glyph_y = baseline
                .saturating_sub(metrics.ymin)
                .saturating_sub(metrics.height as i32);
            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx];
                    if coverage > 0 {
                        canvas::blend_pixel(
                            dst,
                            glyph_x.saturating_add(gx as i32),
                            glyph_y.saturating_add(gy as i32),
                            rgba,
                            coverage,
                        );
                    }
                }
            }
            pen += self.advance(ch);
        }
        pen - origin.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = FontdueSource::from_bytes(b"not a font", "inline");
        assert!(matches!(
            result,
            Err(FontError::Parse { ref origin, .. }) if origin == "inline"
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = Path::new("/nonexistent/quire/font.ttf");
        match FontdueSource::load(path) {
            Err(FontError::Read { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("loaded a font from a missing path"),
        }
    }

    #[test]
    fn test_system_font_measure_matches_draw() {
        // Skip on machines without any of the well-known fonts.
        let Ok(source) = FontdueSource::system() else {
            return;
        };
        let face = source.face(16);
        let mut dst = RgbaImage::new(200, 40);
        for word in ["Hello,", "world.", "fi"] {
            let advance = face.draw(&mut dst, word, FixedPoint::from_px(2, 24), ColorValue::BLACK);
            assert_eq!(advance, face.measure(word), "word {word:?}");
        }
        assert!(face.line_height() > Fixed::ZERO);
        assert!(face.ascent() > Fixed::ZERO);
    }
}
