//! The background renderer component.
//!
//! [`Background`] owns the star field, the per-frame connection scratch, and
//! the active theme, and sequences one frame as update -> rebuild -> draw ->
//! reschedule. It talks to the embedding environment through two injected
//! capabilities: a [`Host`] (viewport measurement and frame scheduling) and a
//! [`Canvas`] (the drawing surface). The winit/wgpu layer implements both for
//! production; tests substitute counting fakes and drive frames by hand.
//!
//! Lifecycle: [`attach`](Background::attach) measures the viewport, spawns
//! the field, and schedules the first frame. [`detach`](Background::detach)
//! cancels the scheduled frame and makes every later event a no-op; calling
//! it again is harmless. A component that was never attached (for example
//! when the GPU is unavailable) stays inert.

use glam::Vec2;

use crate::connections::{self, Connection};
use crate::field::StarField;
use crate::theme::Theme;

/// Handle for a scheduled animation frame.
pub type FrameId = u64;

/// Scheduling and measurement capability provided by the embedding
/// environment.
pub trait Host {
    /// Current viewport size in pixels.
    fn viewport(&self) -> Vec2;

    /// Schedule one animation frame; returns a handle for cancellation.
    fn request_frame(&mut self) -> FrameId;

    /// Cancel a previously scheduled frame. Unknown or already-delivered
    /// handles are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// Drawing capability for one frame. All coordinates are in pixels.
pub trait Canvas {
    /// Erase everything drawn so far this frame.
    fn clear(&mut self);

    /// Stroke a 1-px line between two points.
    fn line(&mut self, from: Vec2, to: Vec2, color: crate::theme::Rgba);

    /// Fill a disc.
    fn disc(&mut self, center: Vec2, radius: f32, color: crate::theme::Rgba);
}

/// The glow halo is drawn at twice the core radius.
const GLOW_RADIUS_FACTOR: f32 = 2.0;

/// The glow halo keeps a fixed 10% of the core alpha across every theme.
const GLOW_ALPHA_FACTOR: f32 = 0.1;

/// Animated constellation layer: twinkling stars joined by proximity-faded
/// lines, brightened near the pointer.
pub struct Background {
    field: StarField,
    connections: Vec<Connection>,
    theme: Theme,
    pending: Option<FrameId>,
    attached: bool,
}

impl Background {
    pub fn new(theme: Theme) -> Self {
        Self {
            field: StarField::new(),
            connections: Vec::new(),
            theme,
            pending: None,
            attached: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    /// Connections from the most recent frame. Rebuilt from scratch each
    /// frame; never carried over.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Spawn the field for the host's viewport and schedule the first frame.
    ///
    /// Attaching an already-attached component is a no-op.
    pub fn attach<H: Host>(&mut self, host: &mut H) {
        if self.attached {
            return;
        }
        let viewport = host.viewport();
        self.field
            .regenerate(viewport.x, viewport.y, &mut rand::thread_rng());
        self.attached = true;
        self.pending = Some(host.request_frame());
    }

    /// Record the latest pointer position. Ignored when detached.
    pub fn pointer_moved(&mut self, position: Vec2) {
        if self.attached {
            self.field.set_pointer(position);
        }
    }

    /// Re-measure the viewport and regenerate the whole field.
    ///
    /// Existing stars are discarded, not repositioned: a resize produces a
    /// visually new field rather than a stretched one.
    pub fn resized<H: Host>(&mut self, host: &mut H) {
        if !self.attached {
            return;
        }
        let viewport = host.viewport();
        self.field
            .regenerate(viewport.x, viewport.y, &mut rand::thread_rng());
    }

    /// Run one animation frame: twinkle, rebuild connections, draw, and
    /// schedule the next frame. `now_ms` is wall-clock milliseconds.
    pub fn frame<H: Host, C: Canvas>(&mut self, host: &mut H, canvas: &mut C, now_ms: f64) {
        if !self.attached {
            return;
        }
        self.pending = None;

        self.field.twinkle(now_ms);
        connections::rebuild(self.field.stars(), self.field.pointer(), &mut self.connections);
        self.draw(canvas);

        self.pending = Some(host.request_frame());
    }

    /// Cancel the scheduled frame and stop reacting to events. Idempotent.
    pub fn detach<H: Host>(&mut self, host: &mut H) {
        if let Some(id) = self.pending.take() {
            host.cancel_frame(id);
        }
        self.attached = false;
    }

    fn draw(&self, canvas: &mut impl Canvas) {
        canvas.clear();
        let colors = self.theme.colors();
        let stars = self.field.stars();

        for connection in &self.connections {
            canvas.line(
                stars[connection.a].position,
                stars[connection.b].position,
                colors.connection.with_alpha(connection.opacity),
            );
        }

        for star in stars {
            // Glow halo beneath the core disc.
            canvas.disc(
                star.position,
                star.radius * GLOW_RADIUS_FACTOR,
                colors.star.with_alpha(star.brightness * GLOW_ALPHA_FACTOR),
            );
            canvas.disc(star.position, star.radius, colors.star.with_alpha(star.brightness));
        }
    }
}
