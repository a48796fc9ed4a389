//! Star field state: spawning, twinkling, and resize regeneration.
//!
//! The field owns every star plus the latest pointer position. Event handlers
//! only write plain values here; all recomputation happens in the frame step
//! that the [`Background`](crate::background::Background) component drives.
//!
//! Star count scales with viewport area: one star per [`DENSITY_DIVISOR`]
//! square pixels, so a 1920x1080 window gets 138 stars and a zero-area
//! viewport gets none.

use glam::Vec2;
use rand::Rng;

/// Viewport area (in square pixels) covered by a single star.
pub const DENSITY_DIVISOR: f32 = 15_000.0;

/// Lower brightness clamp applied after every twinkle step.
pub const MIN_BRIGHTNESS: f32 = 0.2;

/// Upper brightness clamp applied after every twinkle step.
pub const MAX_BRIGHTNESS: f32 = 1.0;

/// Per-frame brightness increment scale.
const TWINKLE_STEP: f32 = 0.01;

/// Core disc radius range at spawn.
const RADIUS_MIN: f32 = 1.0;
const RADIUS_MAX: f32 = 3.0;

/// Twinkle oscillation rate range at spawn (radians per millisecond).
const TWINKLE_RATE_MIN: f32 = 0.01;
const TWINKLE_RATE_MAX: f32 = 0.03;

/// A single animated point in the background field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Position in pixels, within the viewport the star was spawned for.
    pub position: Vec2,
    /// Core disc radius in pixels. The glow halo is drawn at twice this.
    pub radius: f32,
    /// Current alpha, kept in `[MIN_BRIGHTNESS, MAX_BRIGHTNESS]`.
    pub brightness: f32,
    /// Phase multiplier for the wall-clock twinkle oscillator.
    pub twinkle_rate: f32,
}

/// The mutable state behind the constellation background.
///
/// Stars persist and mutate in place (brightness only) until the viewport is
/// resized, at which point the whole set is regenerated from scratch rather
/// than repositioned.
#[derive(Debug, Default)]
pub struct StarField {
    stars: Vec<Star>,
    width: f32,
    height: f32,
    pointer: Vec2,
}

impl StarField {
    /// Create an empty field. Call [`regenerate`](Self::regenerate) once the
    /// viewport dimensions are known.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stars a `width` x `height` viewport gets.
    pub fn star_count(width: f32, height: f32) -> usize {
        let area = width * height;
        if area <= 0.0 {
            return 0;
        }
        (area / DENSITY_DIVISOR) as usize
    }

    /// Discard all stars and spawn a fresh set for the given viewport.
    ///
    /// Each star gets a uniformly random position inside the viewport, radius
    /// in `[1, 3)`, brightness in `[0.2, 1.0)` and twinkle rate in
    /// `[0.01, 0.03)`.
    pub fn regenerate<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = Self::star_count(width, height);
        self.stars.clear();
        self.stars.reserve(count);
        for _ in 0..count {
            self.stars.push(Star {
                position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                radius: rng.gen_range(RADIUS_MIN..RADIUS_MAX),
                brightness: rng.gen_range(MIN_BRIGHTNESS..MAX_BRIGHTNESS),
                twinkle_rate: rng.gen_range(TWINKLE_RATE_MIN..TWINKLE_RATE_MAX),
            });
        }
    }

    /// Advance every star's brightness for the current wall-clock time.
    ///
    /// `now_ms` itself is the phase input, so the twinkle needs no stored
    /// phase and is robust to dropped frames.
    pub fn twinkle(&mut self, now_ms: f64) {
        for star in &mut self.stars {
            let step = (now_ms * star.twinkle_rate as f64).sin() as f32 * TWINKLE_STEP;
            star.brightness = (star.brightness + step).clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS);
        }
    }

    /// Store the latest pointer position. Last write wins; the frame step is
    /// the sole reader.
    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Latest pointer position in pixels.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// All stars, in spawn order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Viewport width the field was last generated for.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Viewport height the field was last generated for.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of stars in the field.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the field has no stars, as for a zero-area viewport.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
