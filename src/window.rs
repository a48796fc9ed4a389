//! winit application driving the background renderer full-window.
//!
//! [`WindowHost`] adapts winit's redraw machinery to the [`Host`] frame
//! scheduling contract: `request_frame` asks the window for a redraw and
//! remembers the handle, `cancel_frame` forgets it, and the redraw handler
//! only runs a frame while a handle is outstanding. If GPU setup fails the
//! window still opens; the background simply never attaches and the page
//! degrades to a plain backdrop.

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::background::{Background, FrameId, Host};
use crate::gpu::{FrameCanvas, GpuState};
use crate::theme::Theme;
use crate::time::Time;

/// [`Host`] implementation over a winit window.
pub struct WindowHost {
    window: Arc<Window>,
    next_frame: FrameId,
    pending: Option<FrameId>,
}

impl WindowHost {
    fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            next_frame: 0,
            pending: None,
        }
    }

    fn window(&self) -> &Window {
        &self.window
    }

    /// Consume the outstanding frame handle, if any. Returns `None` when the
    /// scheduled frame was cancelled or none was requested.
    fn take_pending(&mut self) -> Option<FrameId> {
        self.pending.take()
    }
}

impl Host for WindowHost {
    fn viewport(&self) -> Vec2 {
        let size = self.window.inner_size();
        Vec2::new(size.width as f32, size.height as f32)
    }

    fn request_frame(&mut self) -> FrameId {
        self.next_frame += 1;
        self.pending = Some(self.next_frame);
        self.window.request_redraw();
        self.next_frame
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }
}

struct App {
    host: Option<WindowHost>,
    gpu: Option<GpuState>,
    canvas: FrameCanvas,
    background: Background,
    time: Time,
}

impl App {
    fn new(theme: Theme) -> Self {
        Self {
            host: None,
            gpu: None,
            canvas: FrameCanvas::new(),
            background: Background::new(theme),
            time: Time::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("constel")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut host = WindowHost::new(window.clone());
        match pollster::block_on(GpuState::new(window)) {
            Ok(gpu) => {
                self.gpu = Some(gpu);
                self.background.attach(&mut host);
            }
            // Degraded mode: keep the window, skip the animation entirely.
            Err(e) => eprintln!("GPU unavailable, background disabled: {}", e),
        }
        self.host = Some(host);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(host) = self.host.as_mut() {
                    self.background.detach(host);
                }
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(physical_size);
                }
                if let Some(host) = self.host.as_mut() {
                    self.background.resized(host);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.background
                    .pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::RedrawRequested => {
                let Some(host) = self.host.as_mut() else {
                    return;
                };
                if host.take_pending().is_none() {
                    return;
                }

                self.time.update();
                self.background
                    .frame(host, &mut self.canvas, self.time.elapsed_ms());

                if let Some(gpu) = self.gpu.as_mut() {
                    match gpu.render(&self.canvas) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }

                if self.time.frame() % 120 == 0 {
                    host.window()
                        .set_title(&format!("constel ({:.0} fps)", self.time.fps()));
                }
            }
            _ => {}
        }
    }
}

/// Open a window and run the background until it is closed.
pub fn run(theme: Theme) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(theme);
    event_loop.run_app(&mut app)
}
