//! Raster primitives over [`image::RgbaImage`].
//!
//! All drawing composites with source-over alpha blending against the
//! current canvas, writing fully opaque pixels. Arithmetic truncates the
//! same way everywhere, keeping output byte-deterministic across runs.

use std::f64::consts::PI;

use image::{Rgba, RgbaImage};

use super::palette::Rgb;

/// Geometry of one sine-parametrized wave stroke.
#[derive(Debug, Clone, Copy)]
pub struct WaveParams {
    /// Vertical center line of the wave.
    pub y_offset: f64,
    pub amplitude: f64,
    pub wavelength: f64,
    pub phase: f64,
}

impl WaveParams {
    /// Center y of the stroke at column `x`.
    fn y_at(&self, x: u32) -> f64 {
        self.y_offset + self.amplitude * (2.0 * PI * (x as f64 / self.wavelength) + self.phase).sin()
    }
}

/// Channel interpolation, truncating like the rest of the pipeline.
fn mix(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 * (1.0 - t) + b as f64 * t) as u8
}

/// Interpolate two colors; `t = 0` yields `a`.
pub fn mix_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    (mix(a.0, b.0, t), mix(a.1, b.1, t), mix(a.2, b.2, t))
}

/// Source-over blend one pixel, leaving the canvas opaque.
pub fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgb, alpha: u8) {
    let Rgba([er, eg, eb, _]) = *img.get_pixel(x, y);
    let a = alpha as f64 / 255.0;
    let r = (er as f64 * (1.0 - a) + color.0 as f64 * a) as u8;
    let g = (eg as f64 * (1.0 - a) + color.1 as f64 * a) as u8;
    let b = (eb as f64 * (1.0 - a) + color.2 as f64 * a) as u8;
    img.put_pixel(x, y, Rgba([r, g, b, 255]));
}

/// Blend a vertical run of pixels in one column, clipped to the canvas.
fn blend_column(img: &mut RgbaImage, x: u32, y_top: i64, len: i64, color: Rgb, alpha: u8) {
    let height = img.height() as i64;
    for py in y_top..y_top + len {
        if py >= 0 && py < height {
            blend_pixel(img, x, py as u32, color, alpha);
        }
    }
}

/// Fill the canvas with a three-stop vertical gradient: `top` to `mid` over
/// the upper half, `mid` to `bottom` over the lower half.
pub fn fill_vertical_gradient(img: &mut RgbaImage, top: Rgb, mid: Rgb, bottom: Rgb) {
    let (width, height) = img.dimensions();
    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let (t, c1, c2) = if ratio < 0.5 {
            (ratio * 2.0, top, mid)
        } else {
            ((ratio - 0.5) * 2.0, mid, bottom)
        };
        let (r, g, b) = mix_color(c1, c2, t);
        let pixel = Rgba([r, g, b, 255]);
        for x in 0..width {
            img.put_pixel(x, y, pixel);
        }
    }
}

/// Stroke a wave with a flat color and alpha, `thickness` pixels tall per
/// column.
pub fn stroke_wave(img: &mut RgbaImage, wave: &WaveParams, color: Rgb, alpha: u8, thickness: u32) {
    let width = img.width();
    let half = thickness as i64 / 2;
    for x in 0..width {
        let center = wave.y_at(x) as i64;
        blend_column(img, x, center - half, thickness as i64, color, alpha);
    }
}

/// Stroke a glowing wave: concentric layers from `thickness` down to 1,
/// interpolating color from `outer` toward `inner` and alpha from
/// `alpha_start` toward `alpha_end` as the layers widen.
pub fn stroke_glow_wave(
    img: &mut RgbaImage,
    wave: &WaveParams,
    thickness: u32,
    alpha_start: u8,
    alpha_end: u8,
    inner: Rgb,
    outer: Rgb,
) {
    let width = img.width();
    for offset in (1..=thickness as i64).rev() {
        let fade = (thickness as i64 - offset) as f64 / thickness as f64;
        let alpha =
            (alpha_start as f64 - (alpha_start as f64 - alpha_end as f64) * fade) as u8;
        // ratio 1.0 at the widest layer keeps the inner color dominant there.
        let ratio = offset as f64 / thickness as f64;
        let color = mix_color(outer, inner, ratio);

        for x in 0..width {
            let center = wave.y_at(x) as i64;
            blend_column(img, x, center - offset, offset * 2 + 1, color, alpha);
        }
    }
}

/// Fill a soft orb: concentric discs with radius descending, alpha and the
/// warm-to-soft color mix both scaled by the radius ratio.
pub fn fill_orb(img: &mut RgbaImage, center_x: f64, center_y: f64, radius: f64, warm: Rgb, soft: Rgb) {
    let (width, height) = (img.width() as i64, img.height() as i64);
    let cx = center_x as i64;
    let cy = center_y as i64;

    for r in (1..=radius as i64).rev() {
        let ratio = r as f64 / radius;
        let alpha = (60.0 * ratio) as u8;
        let color = mix_color(soft, warm, ratio);

        for dy in -r..=r {
            let py = cy + dy;
            if py < 0 || py >= height {
                continue;
            }
            let span = ((r * r - dy * dy) as f64).sqrt() as i64;
            for dx in -span..=span {
                let px = cx + dx;
                if px >= 0 && px < width {
                    blend_pixel(img, px as u32, py as u32, color, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_rows_are_uniform_and_distinct() {
        let mut img = RgbaImage::new(16, 16);
        fill_vertical_gradient(&mut img, (0, 0, 0), (128, 128, 128), (255, 255, 255));

        for y in 0..16 {
            let first = img.get_pixel(0, y);
            for x in 1..16 {
                assert_eq!(img.get_pixel(x, y), first);
            }
        }
        assert_ne!(img.get_pixel(0, 0), img.get_pixel(0, 15));
    }

    #[test]
    fn blend_at_full_alpha_replaces_the_pixel() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
        blend_pixel(&mut img, 0, 0, (200, 100, 50), 255);
        assert_eq!(*img.get_pixel(0, 0), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn blend_at_zero_alpha_is_a_noop() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([10, 20, 30, 255]));
        blend_pixel(&mut img, 0, 0, (200, 100, 50), 0);
        assert_eq!(*img.get_pixel(0, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn wave_stroke_clips_at_canvas_edges() {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let wave = WaveParams {
            y_offset: 0.0,
            amplitude: 0.0,
            wavelength: 4.0,
            phase: 0.0,
        };
        // Thick stroke centered on row 0 must not panic and must touch row 0.
        stroke_wave(&mut img, &wave, (255, 255, 255), 255, 6);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(*img.get_pixel(0, 7), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn orb_is_brightest_toward_the_rim_color_mix() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 255]));
        fill_orb(&mut img, 16.0, 16.0, 8.0, (250, 190, 40), (255, 240, 140));
        // Inside the disc something was drawn; outside stayed black.
        assert_ne!(*img.get_pixel(16, 16), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }
}
