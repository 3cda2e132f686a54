//! Text measurement and inline word flow.
//!
//! Text is split on whitespace into words. Words are placed left to right;
//! after each word the pen skips a gap chosen by the word's last character:
//!
//! | trailing char     | gap after the word      |
//! |-------------------|-------------------------|
//! | `, ; : ! ?`       | half the line height    |
//! | `.`               | the full line height    |
//! | anything else     | a third of the line height |
//!
//! Text that starts with whitespace gets a leading one-third gap. This
//! approximates en-quad/em-quad spacing. [`TextFlow`] is the one place these
//! rules live; measuring, line counting and painting all run through it.

use crate::fixed::Fixed;
use crate::font::FontFace;

/// The inline cursor, in whole pixels relative to the box origin.
///
/// `y` is the top of the current line, not its baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pen {
    /// Horizontal position.
    pub x: i32,
    /// Top of the current line.
    pub y: i32,
}

/// The gap placed after `word`, given the face's line height in pixels.
#[must_use]
pub fn space_after(word: &str, line_height_px: i32) -> i32 {
    match word.chars().last() {
        Some(',' | ';' | ':' | '!' | '?') => line_height_px / 2,
        Some('.') => line_height_px,
        _ => line_height_px / 3,
    }
}

fn starts_with_space(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_whitespace)
}

/// Places the words of a text run one after another, breaking lines when a
/// wrap width is set.
pub struct TextFlow<'f> {
    face: &'f dyn FontFace,
    line_height_px: i32,
    line_advance: i32,
    wrap_width: Option<i32>,
}

impl<'f> TextFlow<'f> {
    /// A flow using `face` for metrics. A line break moves the pen down by
    /// `line_advance` pixels (the font size).
    #[must_use]
    pub fn new(face: &'f dyn FontFace, line_advance: i32) -> Self {
        Self {
            face,
            line_height_px: face.line_height().to_px(),
            line_advance,
            wrap_width: None,
        }
    }

    /// Break the line before any word that would end past `width`.
    #[must_use]
    pub fn wrapping_at(mut self, width: i32) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Flow `text` starting at `pen`, leaving `pen` after the last gap.
    ///
    /// `place` is called once per word with the pen position chosen for it
    /// and must return the word's advance; the gap is measured from the pen
    /// position that advance produces. Returns the number of line breaks.
    pub fn run(&self, text: &str, pen: &mut Pen, mut place: impl FnMut(&str, Pen) -> Fixed) -> usize {
        let mut breaks = 0;
        if starts_with_space(text) {
            pen.x = pen.x.saturating_add(self.line_height_px / 3);
        }
        for word in text.split_whitespace() {
            if let Some(limit) = self.wrap_width {
                let width = self.face.measure(word).to_px();
                if pen.x.saturating_add(width) > limit {
                    pen.x = 0;
                    pen.y = pen.y.saturating_add(self.line_advance);
                    breaks += 1;
                }
            }
            let advance = place(word, *pen);
            let end = (Fixed::from_px(pen.x) + advance).to_px();
            pen.x = end.saturating_add(space_after(word, self.line_height_px));
        }
        breaks
    }
}

/// The unwrapped width of `text`, including the gap after its last word.
#[must_use]
pub fn measure_text(face: &dyn FontFace, text: &str) -> i32 {
    let mut pen = Pen::default();
    let _breaks = TextFlow::new(face, 0).run(text, &mut pen, |word, _| face.measure(word));
    pen.x
}

/// How many lines `text` occupies when wrapped at `wrap_width`, starting at
/// the left edge. Text without words occupies no lines.
#[must_use]
pub fn line_count(face: &dyn FontFace, text: &str, wrap_width: i32) -> usize {
    if text.split_whitespace().next().is_none() {
        return 0;
    }
    let mut pen = Pen::default();
    TextFlow::new(face, 1)
        .wrapping_at(wrap_width)
        .run(text, &mut pen, |word, _| face.measure(word))
        + 1
}
