//! Deterministic renderer for the Driftwell app icon.
//!
//! The design is a flowing-wave theme: a deep navy-to-teal vertical gradient
//! with glowing sine-wave strokes and a warm energy orb. Everything derives
//! from the target pixel size and the fixed tables in [`palette`]; rendering
//! the same size twice produces byte-identical pixels.

pub mod canvas;
pub mod catalog;
pub mod palette;

pub use catalog::generate_all;

use image::{DynamicImage, RgbImage, RgbaImage};

use canvas::WaveParams;
use palette::*;

/// Size gates for the decorative layers. Small icons keep only the gradient
/// so the artwork stays legible.
const FLOW_LINES_MIN: u32 = 60;
const MAIN_WAVE_MIN: u32 = 40;
const SECONDARY_WAVE_MIN: u32 = 60;
const HIGHLIGHT_WAVE_MIN: u32 = 80;
const ORB_MIN: u32 = 100;
const BLUR_MIN: u32 = 120;

const BLUR_SIGMA: f32 = 0.5;

/// Texture wave configs: (y, amplitude, wavelength, phase, alpha), all
/// fractions of the icon size except phase and alpha.
const FLOW_LINES: [(f64, f64, f64, f64, u8); 4] = [
    (0.25, 0.03, 0.8, 0.0, 30),
    (0.45, 0.05, 0.6, 1.5, 40),
    (0.65, 0.04, 0.7, 3.0, 35),
    (0.85, 0.03, 0.9, 4.5, 25),
];

/// Render the icon at `size` pixels, layering in fixed order.
pub fn render_icon(size: u32) -> RgbImage {
    let s = size as f64;
    let mut img = RgbaImage::new(size, size);

    canvas::fill_vertical_gradient(&mut img, GRADIENT_TOP, GRADIENT_MID, GRADIENT_BOTTOM);

    if size >= FLOW_LINES_MIN {
        let thickness = ((s * 0.005) as u32).max(1);
        for (y, amplitude, wavelength, phase, alpha) in FLOW_LINES {
            let wave = WaveParams {
                y_offset: s * y,
                amplitude: s * amplitude,
                wavelength: s * wavelength,
                phase,
            };
            canvas::stroke_wave(&mut img, &wave, WAVE_GLOW, alpha, thickness);
        }
    }

    // The primary visual element.
    let wave_y = s * 0.55;
    let amplitude = s * 0.12;
    let wavelength = s * 0.5;
    let thickness = ((s * 0.06) as u32).max(3);

    if size >= MAIN_WAVE_MIN {
        let wave = WaveParams {
            y_offset: wave_y,
            amplitude,
            wavelength,
            phase: 0.5,
        };
        canvas::stroke_glow_wave(&mut img, &wave, thickness, 220, 60, WAVE_PRIMARY, WAVE_ACCENT);
    }

    if size >= SECONDARY_WAVE_MIN {
        let wave = WaveParams {
            y_offset: wave_y - s * 0.08,
            amplitude: amplitude * 0.7,
            wavelength: wavelength * 1.2,
            phase: 2.0,
        };
        let secondary_thickness = ((thickness as f64 * 0.5) as u32).max(2);
        canvas::stroke_wave(&mut img, &wave, WAVE_SECONDARY, 120, secondary_thickness);
    }

    if size >= ORB_MIN {
        canvas::fill_orb(&mut img, s * 0.75, s * 0.35, s * 0.12, ENERGY_WARM, ENERGY_SOFT);
    }

    if size >= HIGHLIGHT_WAVE_MIN {
        let wave = WaveParams {
            y_offset: wave_y + s * 0.06,
            amplitude: amplitude * 0.5,
            wavelength: wavelength * 0.8,
            phase: 1.0,
        };
        let highlight_thickness = ((s * 0.015) as u32).max(1);
        canvas::stroke_wave(&mut img, &wave, WAVE_GLOW, 100, highlight_thickness);
    }

    let img = if size >= BLUR_MIN {
        image::imageops::blur(&img, BLUR_SIGMA)
    } else {
        img
    };

    DynamicImage::ImageRgba8(img).to_rgb8()
}
