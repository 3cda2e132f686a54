//! Pixel buffer operations.
//!
//! Buffers are `image::RgbaImage`s holding non-premultiplied RGBA. All
//! drawing is clipped to the destination bounds; coordinates may be negative
//! or past the edge.

use image::{Rgba, RgbaImage};
use quire_css::ColorValue;

/// Allocate a transparent buffer. Negative dimensions are floored at 0.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn new_canvas(width: i32, height: i32) -> RgbaImage {
    RgbaImage::new(width.max(0) as u32, height.max(0) as u32)
}

/// Overwrite every pixel with `color` (source-copy, no blending).
pub fn fill(dst: &mut RgbaImage, color: ColorValue) {
    let rgba = Rgba(color.to_array());
    for pixel in dst.pixels_mut() {
        *pixel = rgba;
    }
}

/// Blend `src` over the pixel at (x, y), scaling its alpha by `coverage`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn blend_pixel(dst: &mut RgbaImage, x: i32, y: i32, src: Rgba<u8>, coverage: u8) {
    if x < 0 || y < 0 || x as u32 >= dst.width() || y as u32 >= dst.height() {
        return;
    }
    let pixel = dst.get_pixel_mut(x as u32, y as u32);
    *pixel = source_over(src, *pixel, coverage);
}

/// Blend a solid rectangle over `dst`.
pub fn fill_rect_over(
    dst: &mut RgbaImage,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: ColorValue,
) {
    let rgba = Rgba(color.to_array());
    for py in y..y.saturating_add(height) {
        for px in x..x.saturating_add(width) {
            blend_pixel(dst, px, py, rgba, u8::MAX);
        }
    }
}

/// Composite `src` over `dst` with its top-left corner at (x, y).
#[allow(clippy::cast_possible_wrap)]
pub fn composite_over(dst: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    for (sx, sy, pixel) in src.enumerate_pixels() {
        blend_pixel(
            dst,
            x.saturating_add(sx as i32),
            y.saturating_add(sy as i32),
            *pixel,
            u8::MAX,
        );
    }
}

/// Blend a frame `border_width` pixels wide along every edge of `dst`.
#[allow(clippy::cast_possible_wrap)]
pub fn draw_border_overlay(dst: &mut RgbaImage, border_width: u32, color: ColorValue) {
    let (width, height) = dst.dimensions();
    let rgba = Rgba(color.to_array());
    for y in 0..height {
        for x in 0..width {
            let on_edge = x < border_width
                || y < border_width
                || x >= width.saturating_sub(border_width)
                || y >= height.saturating_sub(border_width);
            if on_edge {
                blend_pixel(dst, x as i32, y as i32, rgba, u8::MAX);
            }
        }
    }
}

/// Porter-Duff source-over for non-premultiplied colors.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn source_over(src: Rgba<u8>, dst: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0 * (f32::from(coverage) / 255.0);
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = da.mul_add(1.0 - sa, sa);
    let channel = |i: usize| {
        let blended =
            f32::from(src[i]).mul_add(sa, f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        blended.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_floors_negative_sizes() {
        assert_eq!(new_canvas(-5, 10).dimensions(), (0, 10));
        assert_eq!(new_canvas(3, -1).dimensions(), (3, 0));
    }

    #[test]
    fn test_fill_copies_exact_bytes() {
        let mut dst = new_canvas(2, 2);
        let sentinel = ColorValue::rgba(0, 0xE0, 0xE0, 0);
        fill(&mut dst, sentinel);
        assert!(dst.pixels().all(|p| p.0 == [0, 0xE0, 0xE0, 0]));
    }

    #[test]
    fn test_source_over_extremes() {
        let red = Rgba([255, 0, 0, 255]);
        let blue = Rgba([0, 0, 255, 255]);
        assert_eq!(source_over(red, blue, 255), red);
        assert_eq!(source_over(Rgba([255, 0, 0, 0]), blue, 255), blue);
        assert_eq!(source_over(red, blue, 0), blue);
    }

    #[test]
    fn test_source_over_half_alpha_on_opaque() {
        let out = source_over(Rgba([255, 255, 255, 128]), Rgba([0, 0, 0, 255]), 255);
        assert_eq!(out[3], 255);
        assert!((127..=129).contains(&out[0]));
    }

    #[test]
    fn test_composite_clips_to_destination() {
        let mut dst = new_canvas(4, 4);
        let mut src = new_canvas(3, 3);
        fill(&mut src, ColorValue::BLACK);
        composite_over(&mut dst, &src, 2, -1);
        assert_eq!(dst.get_pixel(3, 0).0, [0, 0, 0, 255]);
        assert_eq!(dst.get_pixel(2, 1).0, [0, 0, 0, 255]);
        assert_eq!(dst.get_pixel(2, 2).0, [0, 0, 0, 0]);
        assert_eq!(dst.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_border_overlay_frames_edges() {
        let mut dst = new_canvas(10, 10);
        draw_border_overlay(&mut dst, 2, ColorValue::BLUE);
        assert_eq!(dst.get_pixel(0, 5).0, [0, 0, 255, 255]);
        assert_eq!(dst.get_pixel(9, 9).0, [0, 0, 255, 255]);
        assert_eq!(dst.get_pixel(8, 5).0, [0, 0, 255, 255]);
        assert_eq!(dst.get_pixel(5, 5).0, [0, 0, 0, 0]);
        assert_eq!(dst.get_pixel(7, 7).0, [0, 0, 0, 0]);
    }
}
