//! Speed to colour mapping for the renderer.
//!
//! `t = |v|^2 / max_speed^2` is pushed through a seven-stop palette running
//! from blue (slow) to red (fast), interpolating linearly inside each of the
//! six segments.

use crate::simulation::states::NVec2;

/// RGB, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Window clear colour
pub const BACKGROUND: Rgb = Rgb::new(40.0 / 255.0, 40.0 / 255.0, 50.0 / 255.0);

pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0.0, 0.4, 0.9),
    Rgb::new(0.0, 0.75, 0.9),
    Rgb::new(0.0, 1.0, 0.8),
    Rgb::new(0.5, 1.0, 0.4),
    Rgb::new(0.9, 1.0, 0.4),
    Rgb::new(1.0, 0.9, 0.4),
    Rgb::new(1.0, 0.4, 0.4),
];

const SEGMENTS: usize = PALETTE.len() - 1;

/// Palette lookup for `t`, clamped to [0, 1].
pub fn palette_color(t: f32) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * SEGMENTS as f32;
    let mut index = scaled as usize;
    let mut local = scaled - index as f32;
    if index >= SEGMENTS {
        index = SEGMENTS - 1;
        local = 1.0;
    }

    let lo = PALETTE[index];
    let hi = PALETTE[index + 1];
    let lerp = |a: f32, b: f32| (a * (1.0 - local) + b * local).clamp(0.0, 1.0);
    Rgb::new(lerp(lo.r, hi.r), lerp(lo.g, hi.g), lerp(lo.b, hi.b))
}

/// Colour for a particle moving at `velocity`.
/// Speeds above twice `max_speed` go straight to the top of the palette.
pub fn speed_color(velocity: &NVec2, max_speed: f64) -> Rgb {
    let speed_sq = velocity.norm_squared();
    let max_sq = max_speed * max_speed;
    if speed_sq > 4.0 * max_sq {
        return palette_color(1.0);
    }
    palette_color((speed_sq / max_sq) as f32)
}
