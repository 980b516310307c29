//! Fixed color tables for the icon artwork.

pub type Rgb = (u8, u8, u8);

// Background gradient, deep navy down to rich teal.
pub const GRADIENT_TOP: Rgb = (15, 23, 42);
pub const GRADIENT_MID: Rgb = (30, 41, 59);
pub const GRADIENT_BOTTOM: Rgb = (20, 83, 96);

// Wave strokes.
pub const WAVE_PRIMARY: Rgb = (20, 184, 166);
pub const WAVE_SECONDARY: Rgb = (45, 212, 191);
pub const WAVE_ACCENT: Rgb = (94, 234, 212);
pub const WAVE_GLOW: Rgb = (153, 246, 228);

// Warm energy accents for the orb.
pub const ENERGY_WARM: Rgb = (251, 191, 36);
pub const ENERGY_SOFT: Rgb = (254, 240, 138);
