//! Rectangular world walls.
//!
//! The world is `[-half_width, half_width] x [-half_height, half_height]`
//! in physics units. Camera zoom never enters here.

use super::states::Particle;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub half_width: f64,
    pub half_height: f64,
}

/// Which walls a resolver call touched, one flag per edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub top: bool,
    pub bottom: bool,
    pub right: bool,
    pub left: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.right || self.left
    }
}

/// Clamp `p` inside `bounds` and reflect the velocity component normal to
/// every wall it crossed, keeping `damp_factor` of its magnitude.
///
/// The four edges are checked independently, so a particle in a corner is
/// corrected on both axes in one call. A particle whose edge sits exactly on
/// a wall is left alone, which makes a second call a no-op.
pub fn resolve_boundary(p: &mut Particle, bounds: &Bounds, damp_factor: f64) -> WallHits {
    let r = p.radius();
    let (w, h) = (bounds.half_width, bounds.half_height);
    let mut hits = WallHits::default();

    if p.position.y + r > h {
        p.position.y = h - r;
        p.velocity.y *= -damp_factor;
        hits.top = true;
    }
    if p.position.y - r < -h {
        p.position.y = -h + r;
        p.velocity.y *= -damp_factor;
        hits.bottom = true;
    }
    if p.position.x + r > w {
        p.position.x = w - r;
        p.velocity.x *= -damp_factor;
        hits.right = true;
    }
    if p.position.x - r < -w {
        p.position.x = -w + r;
        p.velocity.x *= -damp_factor;
        hits.left = true;
    }
    hits
}
