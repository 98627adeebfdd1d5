use std::error::Error;
use std::time::{Duration, Instant};

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::surface::SurfaceSize;

pub struct AppConfig {
    pub title: String,
    pub desired_size: PhysicalSize<u32>,
    pub vsync: Option<bool>,
}

pub struct AppContext {
    pub window: Window,
    pub pixels: Pixels,
    pub surface_size: SurfaceSize,
}

/// Input latched since the previous frame. Flags are one-shot: the loop
/// hands them to `update_state` once, then clears them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub jump: bool,
    pub restart: bool,
}

pub trait GameApp {
    type State;

    fn init_state(&mut self, ctx: &mut AppContext) -> Self::State;

    fn update_state(
        &mut self,
        state: &mut Self::State,
        input: InputFrame,
        dt: Duration,
        ctx: &mut AppContext,
    );

    fn render(&mut self, state: &Self::State, frame: &mut [u8], size: SurfaceSize);
}

/// Runs a [`GameApp`] in a window: one update-then-render step per redraw,
/// rescheduled for as long as the window lives. Closing the window is the
/// loop's only stop condition.
pub fn run_game<G: GameApp + 'static>(config: AppConfig, mut game: G) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(config.desired_size)
        .with_resizable(false)
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let surface_size = SurfaceSize::new(window_size.width, window_size.height);

    let surface_texture = SurfaceTexture::new(surface_size.width, surface_size.height, &window);
    let mut pixels_builder =
        PixelsBuilder::new(surface_size.width, surface_size.height, surface_texture);
    if let Some(vsync) = config.vsync {
        pixels_builder = pixels_builder.enable_vsync(vsync);
    }
    let pixels = pixels_builder.build()?;

    let mut ctx = AppContext {
        window,
        pixels,
        surface_size,
    };
    let mut state = game.init_state(&mut ctx);
    let mut input = InputFrame::default();
    let mut last_frame = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    // The pixel buffer keeps its fixed logical size; only the
                    // presentation surface follows the window.
                    if let Err(err) = ctx.pixels.resize_surface(size.width.max(1), size.height.max(1)) {
                        eprintln!("resize failed: {err}");
                    }
                    ctx.window.request_redraw();
                }
                WindowEvent::KeyboardInput { input: key, .. } => {
                    if key.state == ElementState::Pressed {
                        match key.virtual_keycode {
                            Some(VirtualKeyCode::Space) => input.jump = true,
                            Some(VirtualKeyCode::R) => input.restart = true,
                            _ => {}
                        }
                    }
                }
                WindowEvent::MouseInput {
                    state: mouse_state,
                    button,
                    ..
                } => {
                    if *button == MouseButton::Left && *mouse_state == ElementState::Pressed {
                        input.jump = true;
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(last_frame);
                last_frame = now;

                game.update_state(&mut state, input, dt, &mut ctx);
                input = InputFrame::default();

                let size = ctx.surface_size;
                game.render(&state, ctx.pixels.frame_mut(), size);
                if let Err(err) = ctx.pixels.render() {
                    eprintln!("present failed: {err}");
                }
            }
            Event::MainEventsCleared => {
                ctx.window.request_redraw();
            }
            _ => {}
        }
    });

    #[allow(unreachable_code)]
    Ok(())
}
