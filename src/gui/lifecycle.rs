use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use tabpager::core::Rect;

use super::render::RenderTarget;
use super::state::{App, DemoWindow};

const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only create the window once.
        if self.window.is_some() {
            return;
        }

        let context = match Context::new(event_loop.owned_display_handle()) {
            Ok(ctx) => ctx,
            Err(err) => {
                log::error!("failed to create rendering context: {err}");
                event_loop.exit();
                return;
            }
        };

        match DemoWindow::create(event_loop, &context, &self.config) {
            Ok(win) => self.window = Some(win),
            Err(err) => {
                log::error!("{err:#}");
                event_loop.exit();
                return;
            }
        }
        self.context = Some(context);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.window.as_mut() else {
            return;
        };
        if win.window.id() != window_id {
            return;
        }
        let mut should_redraw = false;

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                win.view.set_frame(Rect::new(
                    0.0,
                    0.0,
                    size.width as f32,
                    size.height as f32,
                ));
                should_redraw = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                should_redraw = win.on_cursor_moved(position);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                win.on_mouse_input(state, button);
                should_redraw = true;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                win.on_mouse_wheel(delta);
                should_redraw = true;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                should_redraw = win.on_keyboard_input(&event);
            }
            WindowEvent::RedrawRequested => win.on_redraw_requested(),
            _ => (),
        }

        win.drain_events();
        if should_redraw {
            win.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(win) = self.window.as_mut() else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        let now = Instant::now();
        let was_animating = win.animating;
        win.animating = win.view.tick(now);
        win.drain_events();

        if win.animating || was_animating {
            win.window.request_redraw();
        }
        if win.animating {
            event_loop.set_control_flow(ControlFlow::WaitUntil(now + ANIMATION_FRAME_INTERVAL));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

impl DemoWindow {
    fn on_redraw_requested(&mut self) {
        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if let Err(err) = self.surface.resize(w, h) {
            log::warn!("surface resize failed: {err}");
            return;
        }
        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(err) => {
                log::warn!("no frame buffer: {err}");
                return;
            }
        };

        let (width, height) = (size.width as usize, size.height as usize);
        let mut target = RenderTarget {
            buffer: &mut buffer,
            width,
            height,
            clip: Rect::new(0.0, 0.0, width as f32, height as f32),
        };
        self.renderer.draw(&mut target, &self.view, &self.palette);

        if let Err(err) = buffer.present() {
            log::warn!("present failed: {err}");
        }
    }
}
