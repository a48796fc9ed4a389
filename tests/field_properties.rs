//! End-to-end checks of the renderer's observable properties, driven through
//! the public API with hand-rolled host and canvas fakes.

use constel::prelude::*;
use constel::{connections, MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct FakeHost {
    viewport: Vec2,
    requested: u64,
    cancelled: u64,
    next_id: FrameId,
}

impl FakeHost {
    fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            requested: 0,
            cancelled: 0,
            next_id: 0,
        }
    }
}

impl Host for FakeHost {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        self.requested += 1;
        self.next_id
    }

    fn cancel_frame(&mut self, _id: FrameId) {
        self.cancelled += 1;
    }
}

/// Counts draw calls without retaining geometry.
#[derive(Default)]
struct TallyCanvas {
    clears: usize,
    lines: usize,
    discs: usize,
}

impl Canvas for TallyCanvas {
    fn clear(&mut self) {
        self.clears += 1;
        self.lines = 0;
        self.discs = 0;
    }

    fn line(&mut self, _from: Vec2, _to: Vec2, _color: Rgba) {
        self.lines += 1;
    }

    fn disc(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.discs += 1;
    }
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(99)
}

#[test]
fn particle_count_scales_with_area() {
    let cases = [
        (1920.0, 1080.0, 138),
        (1280.0, 720.0, 61),
        (300.0, 50.0, 1),
        (100.0, 100.0, 0),
        (0.0, 4096.0, 0),
    ];
    let mut field = StarField::new();
    for (w, h, expected) in cases {
        field.regenerate(w, h, &mut seeded());
        assert_eq!(field.len(), expected, "viewport {w}x{h}");
    }
}

#[test]
fn brightness_always_within_bounds() {
    let mut field = StarField::new();
    field.regenerate(1920.0, 1080.0, &mut seeded());

    let mut now_ms = -1.0e9;
    for _ in 0..1000 {
        field.twinkle(now_ms);
        now_ms += 7.77e6; // wild jumps stand in for arbitrary wall-clock input
        for star in field.stars() {
            assert!(star.brightness >= MIN_BRIGHTNESS && star.brightness <= MAX_BRIGHTNESS);
        }
    }
}

#[test]
fn connections_are_unique_unordered_pairs() {
    let mut field = StarField::new();
    field.regenerate(800.0, 600.0, &mut seeded());
    field.set_pointer(Vec2::new(400.0, 300.0));

    let mut out = Vec::new();
    connections::rebuild(field.stars(), field.pointer(), &mut out);

    let mut seen = std::collections::HashSet::new();
    for c in &out {
        assert!(c.a < c.b);
        assert!(seen.insert((c.a, c.b)), "pair ({}, {}) appears twice", c.a, c.b);
    }
}

#[test]
fn connections_respect_distance_gate_and_floor() {
    let mut field = StarField::new();
    field.regenerate(1600.0, 900.0, &mut seeded());

    let mut out = Vec::new();
    connections::rebuild(field.stars(), Vec2::new(-1.0e6, -1.0e6), &mut out);

    let stars = field.stars();
    for c in &out {
        let d = stars[c.a].position.distance(stars[c.b].position);
        assert!(d < constel::MAX_DISTANCE);
        assert!(c.opacity > constel::VISIBILITY_FLOOR);
        assert!(c.opacity <= 1.0);
    }
}

#[test]
fn resize_replaces_particles_within_new_bounds() {
    let mut host = FakeHost::new(1600.0, 1000.0);
    let mut background = Background::new(Theme::Green);
    background.attach(&mut host);
    assert_eq!(background.field().len(), 106);

    host.viewport = Vec2::new(640.0, 480.0);
    background.resized(&mut host);
    assert_eq!(background.field().len(), 20);
    for star in background.field().stars() {
        assert!(star.position.x >= 0.0 && star.position.x < 640.0);
        assert!(star.position.y >= 0.0 && star.position.y < 480.0);
    }
}

#[test]
fn teardown_is_idempotent_and_final() {
    let mut host = FakeHost::new(1024.0, 768.0);
    let mut background = Background::new(Theme::Default);
    background.attach(&mut host);
    assert_eq!(host.requested, 1);

    background.detach(&mut host);
    background.detach(&mut host);
    assert_eq!(host.cancelled, 1);

    // Nothing is scheduled or drawn after teardown.
    let mut canvas = TallyCanvas::default();
    background.frame(&mut host, &mut canvas, 50.0);
    assert_eq!(host.requested, 1);
    assert_eq!(canvas.clears, 0);
}

#[test]
fn minimal_viewport_draws_one_star_and_no_lines() {
    // 300 x 50 = 15000 square pixels: exactly one star, so no pairs exist.
    let mut host = FakeHost::new(300.0, 50.0);
    let mut background = Background::new(Theme::Purple);
    background.attach(&mut host);

    let mut canvas = TallyCanvas::default();
    background.frame(&mut host, &mut canvas, 8.3);

    assert_eq!(canvas.clears, 1);
    assert_eq!(canvas.lines, 0);
    assert_eq!(canvas.discs, 2); // glow + core for the single star
}

#[test]
fn zero_area_viewport_is_a_quiet_no_op() {
    let mut host = FakeHost::new(0.0, 900.0);
    let mut background = Background::new(Theme::Default);
    background.attach(&mut host);

    let mut canvas = TallyCanvas::default();
    background.frame(&mut host, &mut canvas, 0.0);
    background.frame(&mut host, &mut canvas, 16.7);

    assert!(background.field().is_empty());
    assert_eq!(canvas.lines, 0);
    assert_eq!(canvas.discs, 0);
    // The loop keeps running; it just has nothing to draw.
    assert_eq!(host.requested, 3);
}

#[test]
fn pointer_brightens_nearby_connections() {
    let mut field = StarField::new();
    field.regenerate(1280.0, 720.0, &mut seeded());

    let mut far = Vec::new();
    connections::rebuild(field.stars(), Vec2::new(-1.0e6, -1.0e6), &mut far);

    // Park the pointer on the first star and rebuild.
    let anchor = field.stars()[0].position;
    let mut near = Vec::new();
    connections::rebuild(field.stars(), anchor, &mut near);

    // Every connection that existed with the pointer far away still exists,
    // at an opacity at least as high.
    for old in &far {
        let new = near
            .iter()
            .find(|c| c.a == old.a && c.b == old.b)
            .expect("connection lost when pointer moved closer");
        assert!(new.opacity >= old.opacity);
    }
}
