// File: crates/lcm/src/viewer.rs
// Summary: Window that shows a chart via RGBA blit (CPU) using winit + softbuffer.
// Wheel zooms around the cursor, left-drag pans, R resets, Esc/Q or closing the window exits.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use chart_core::types::Insets;
use chart_core::{Chart, RenderOptions, ViewState};
use log::{debug, error, info};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Interaction state between redraws.
#[derive(Clone, Copy, Debug)]
struct Interaction {
    view: ViewState,
    home: ViewState,
    cursor: Option<(f64, f64)>,
    dragging: bool,
}

impl Interaction {
    fn new(chart: &Chart) -> Self {
        let home = ViewState::from_axes(chart);
        Self { view: home, home, cursor: None, dragging: false }
    }

    /// Returns true when the view changed.
    fn cursor_moved(&mut self, x: f64, y: f64, size: PhysicalSize<u32>, insets: &Insets) -> bool {
        let moved = match (self.dragging, self.cursor) {
            (true, Some((px, py))) => {
                self.view.pan_by_pixels(x - px, y - py, size.width as i32, size.height as i32, insets);
                true
            }
            _ => false,
        };
        self.cursor = Some((x, y));
        moved
    }

    fn wheel(&mut self, scroll: f64, size: PhysicalSize<u32>, insets: &Insets) -> bool {
        let Some((cx, cy)) = self.cursor else { return false };
        self.view.zoom_at_pixel(scroll, cx, cy, size.width as i32, size.height as i32, insets);
        true
    }

    fn reset(&mut self) {
        self.view = self.home;
    }
}

fn scroll_amount(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64 * 0.1,
        MouseScrollDelta::PixelDelta(p) => p.y / 240.0,
    }
}

/// Pack an RGBA pixel as softbuffer's 0RGB word.
fn pack_rgb(px: &[u8]) -> u32 {
    ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
}

fn present(
    surface: &mut softbuffer::Surface,
    chart: &mut Chart,
    view: &ViewState,
    base: &RenderOptions,
    size: PhysicalSize<u32>,
) -> Result<()> {
    // Minimised windows report a zero size; nothing to draw.
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resizing surface to {w}x{h}: {e}"))?;

    view.apply_to_chart(chart);
    let opts = RenderOptions { width: w.get() as i32, height: h.get() as i32, ..*base };
    let (rgba, _, _, _) = chart.render_to_rgba8(&opts)?;

    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("acquiring frame buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = pack_rgb(px);
    }
    frame.present().map_err(|e| anyhow!("presenting frame: {e}"))?;
    Ok(())
}

/// Open a window showing `chart` and block until it is closed.
pub fn show(mut chart: Chart, opts: RenderOptions, title: &str) -> Result<()> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .context("creating window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut state = Interaction::new(&chart);
    let insets = opts.insets;
    info!("showing chart; wheel zooms, drag pans, R resets, Esc closes");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        let size = window.inner_size();
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape | VirtualKeyCode::Q => *control_flow = ControlFlow::Exit,
                    VirtualKeyCode::R => {
                        state.reset();
                        window.request_redraw();
                    }
                    _ => {}
                },
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
                WindowEvent::CursorMoved { position, .. } => {
                    if state.cursor_moved(position.x, position.y, size, &insets) {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput { state: pressed, button: MouseButton::Left, .. } => {
                    state.dragging = pressed == ElementState::Pressed;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if state.wheel(scroll_amount(delta), size, &insets) {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(id) if id == window.id() => {
                debug!("redraw {}x{} view={:?}", size.width, size.height, state.view);
                if let Err(e) = present(&mut surface, &mut chart, &state.view, &opts, size) {
                    error!("{e:#}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            _ => {}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Chart {
        let mut c = Chart::new();
        c.x_axis = chart_core::Axis::new("Year", 2009.0, 2025.0);
        c.y_axis = chart_core::Axis::new("n", 0.0, 12.2);
        c
    }

    #[test]
    fn packs_rgb_ignoring_alpha() {
        assert_eq!(pack_rgb(&[0xF4, 0xB4, 0x00, 0xFF]), 0x00F4_B400);
    }

    #[test]
    fn drag_pans_only_while_pressed() {
        let size = PhysicalSize::new(800, 400);
        let insets = Insets::new(0, 0, 0, 0);
        let mut s = Interaction::new(&chart());
        assert!(!s.cursor_moved(100.0, 100.0, size, &insets));
        s.dragging = true;
        assert!(s.cursor_moved(200.0, 100.0, size, &insets));
        assert!(s.view.x_min < 2009.0);
        s.reset();
        assert_eq!(s.view, s.home);
    }

    #[test]
    fn wheel_needs_a_cursor() {
        let size = PhysicalSize::new(800, 400);
        let insets = Insets::new(0, 0, 0, 0);
        let mut s = Interaction::new(&chart());
        assert!(!s.wheel(0.1, size, &insets));
        s.cursor_moved(400.0, 200.0, size, &insets);
        assert!(s.wheel(0.1, size, &insets));
        assert!(s.view.x_max - s.view.x_min < 16.0);
    }
}
