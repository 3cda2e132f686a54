//! 26.6 fixed-point glyph metrics.
//!
//! The low 6 bits hold the fraction of a pixel. Conversion to whole pixels
//! is an arithmetic right shift, which truncates toward negative infinity.
//! Arithmetic saturates at the `i32` range instead of wrapping.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A length in 1/64ths of a pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed(pub i32);

impl Fixed {
    /// Zero length.
    pub const ZERO: Self = Self(0);

    /// Number of fractional bits.
    pub const SHIFT: u32 = 6;

    /// A whole number of pixels, saturating outside `±2^25` px.
    #[must_use]
    pub const fn from_px(px: i32) -> Self {
        Self(px.saturating_mul(1 << Self::SHIFT))
    }

    /// `px * num / den` pixels, saturating. Used for sizes given as a
    /// ratio of a font size.
    #[must_use]
    pub fn from_ratio(px: i32, num: i32, den: i32) -> Self {
        let scaled = i64::from(px) * (1 << Self::SHIFT) * i64::from(num) / i64::from(den);
        Self(i32::try_from(scaled).unwrap_or(if scaled < 0 { i32::MIN } else { i32::MAX }))
    }

    /// Round a floating-point pixel length to the nearest 1/64th.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f32(px: f32) -> Self {
        Self((px * 64.0).round() as i32)
    }

    /// Truncate to whole pixels (`>> 6`).
    #[must_use]
    pub const fn to_px(self) -> i32 {
        self.0 >> Self::SHIFT
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Fixed {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A pen position in fixed-point units. `y` is the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPoint {
    /// Horizontal position.
    pub x: Fixed,
    /// Baseline position.
    pub y: Fixed,
}

impl FixedPoint {
    /// A point at whole-pixel coordinates.
    #[must_use]
    pub const fn from_px(x: i32, y: i32) -> Self {
        Self {
            x: Fixed::from_px(x),
            y: Fixed::from_px(y),
        }
    }
}
