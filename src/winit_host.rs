//! A window that drives the simulator from its redraw loop.
//!
//! Every redraw ticks the simulator once and hands the new state to a render
//! callback, which draws into the window with whatever surface the caller
//! uses. The left mouse button drags vertices, space pauses and resumes.

use crate::drag::DragController;
use crate::error::Result;
use crate::scheduler::{FrameLoop, FrameScheduler};
use crate::simulator::components::nodes::StateStore;
use crate::simulator::Simulator;
use glam::Vec2;
use log::warn;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Schedules frames by requesting redraws of a window.
pub struct RedrawScheduler {
    window: Window,
    generation: u64,
}

impl RedrawScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            generation: 0,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The most recently requested frame.
    pub fn current(&self) -> u64 {
        self.generation
    }
}

impl FrameScheduler for RedrawScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        self.generation += 1;
        self.window.request_redraw();
        self.generation
    }

    // A requested redraw cannot be withdrawn. The frame loop ignores it once
    // it is no longer the pending frame.
    fn cancel_frame(&mut self, _handle: u64) {}
}

/// Open a window sized to the simulator's world and animate it until closed.
///
/// Only returns if the window cannot be created.
pub fn run<F>(mut simulator: Simulator, mut render: F) -> Result<()>
where
    F: FnMut(&Window, &StateStore) + 'static,
{
    let event_loop = EventLoop::new();
    let world_size = simulator.world_size();
    let window = WindowBuilder::new()
        .with_title("springgraph")
        .with_inner_size(PhysicalSize::new(
            world_size.width as u32,
            world_size.height as u32,
        ))
        .build(&event_loop)?;

    let mut frames = FrameLoop::new(RedrawScheduler::new(window));
    let mut drag = DragController::new();
    let mut cursor = Vec2::ZERO;
    frames.start();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        let window_id = frames.scheduler().window().id();

        match event {
            Event::WindowEvent { event, window_id: id } if id == window_id => {
                match event {
                    WindowEvent::CloseRequested => {
                        frames.stop();
                        *control_flow = ControlFlow::Exit;
                    }
                    WindowEvent::Resized(size) => {
                        let (width, height) = (size.width as f32, size.height as f32);
                        if let Err(e) = simulator.set_world_size(width, height) {
                            warn!("Ignoring resize: {e}");
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = Vec2::new(position.x as f32, position.y as f32);
                        drag.pointer_move(&mut simulator, cursor);
                    }
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    } => match state {
                        ElementState::Pressed => {
                            drag.pointer_down(&mut simulator, cursor);
                        }
                        ElementState::Released => {
                            drag.pointer_up(&mut simulator);
                        }
                    },
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(VirtualKeyCode::Space),
                                ..
                            },
                        ..
                    } => {
                        if frames.is_running() {
                            frames.stop();
                        } else {
                            frames.start();
                        }
                    }
                    _ => {}
                }
                // Paused windows still show drags.
                if !frames.is_running() {
                    frames.scheduler().window().request_redraw();
                }
            }
            Event::RedrawRequested(id) if id == window_id => {
                let fired = frames.scheduler().current();
                let state = frames
                    .frame(fired, &mut simulator)
                    .unwrap_or_else(|| simulator.snapshot());
                render(frames.scheduler().window(), &*state);
            }
            _ => {}
        }
    })
}
