//! Transient connection building between nearby stars.
//!
//! Connections are rebuilt from scratch every frame and consumed once during
//! drawing; they carry no persistent identity. A pair of stars is connected
//! when their distance is under [`MAX_DISTANCE`] and the resulting opacity
//! clears [`VISIBILITY_FLOOR`]. Pointer proximity to either endpoint boosts
//! the opacity, which is what makes the field light up around the cursor.
//!
//! The pass is a plain O(n^2) sweep over unordered pairs. Star count is
//! bounded by viewport area (roughly 550 stars on a 4K display), so no
//! spatial bucketing is needed at the current density.

use glam::Vec2;

use crate::field::Star;

/// Maximum distance (pixels) at which two stars connect.
pub const MAX_DISTANCE: f32 = 150.0;

/// Radius (pixels) of pointer influence around a star.
pub const POINTER_RADIUS: f32 = 200.0;

/// Connections at or below this opacity are discarded instead of drawn.
pub const VISIBILITY_FLOOR: f32 = 0.05;

/// Weight of the distance term in the final opacity.
const BASE_WEIGHT: f32 = 0.3;

/// Weight of the pointer influence term in the final opacity.
const POINTER_WEIGHT: f32 = 0.7;

/// A line between two stars, addressed by index into the star slice.
///
/// Invariant: `a < b`, so each unordered pair appears at most once and a star
/// never connects to itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    /// Stroke alpha in `(VISIBILITY_FLOOR, 1.0]`.
    pub opacity: f32,
}

/// Proximity boost for one star: 1 at the pointer, fading linearly to 0 at
/// [`POINTER_RADIUS`].
pub fn pointer_influence(position: Vec2, pointer: Vec2) -> f32 {
    let distance = position.distance(pointer);
    if distance < POINTER_RADIUS {
        1.0 - distance / POINTER_RADIUS
    } else {
        0.0
    }
}

/// Rebuild the connection set for the current star positions and pointer.
///
/// `out` is cleared and refilled, letting the caller reuse its allocation
/// across frames.
pub fn rebuild(stars: &[Star], pointer: Vec2, out: &mut Vec<Connection>) {
    out.clear();
    for (i, star) in stars.iter().enumerate() {
        let influence = pointer_influence(star.position, pointer);
        for (j, other) in stars.iter().enumerate().skip(i + 1) {
            let distance = star.position.distance(other.position);
            if distance >= MAX_DISTANCE {
                continue;
            }

            let mut opacity = (1.0 - distance / MAX_DISTANCE) * BASE_WEIGHT;

            // Either endpoint near the pointer brightens the whole line.
            let other_influence = pointer_influence(other.position, pointer);
            opacity += influence.max(other_influence) * POINTER_WEIGHT;
            let opacity = opacity.min(1.0);

            if opacity > VISIBILITY_FLOOR {
                out.push(Connection { a: i, b: j, opacity });
            }
        }
    }
}
