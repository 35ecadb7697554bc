//! # Example
//! ```no_run
//!use springgraph::prelude::*;
//!
//!let mut simulator = Simulator::builder()
//!    .world_size(400.0, 400.0)
//!    .delta_time(0.005)
//!    .build(Graph::demo())
//!    .unwrap();
//!
//!let mut frames = FrameLoop::new(ManualScheduler::new());
//!frames.start();
//!while let Some(state) = frames.run_pending(&mut simulator) {
//!    if simulator.ticks() == 1000 {
//!        frames.stop();
//!    }
//!    let _positions = state.positions();
//!}
//! ```

pub mod drag;
pub mod error;
mod event_dispatcher;
pub mod graph;
pub mod scheduler;
pub mod simulator;
#[cfg(feature = "winit")]
pub mod winit_host;

pub use error::{Result, SimulatorError};
pub use event_dispatcher::EventDispatcher;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::drag::DragController;
    pub use crate::error::SimulatorError;
    pub use crate::event_dispatcher::EventDispatcher;
    pub use crate::graph::{Graph, GraphEdge, GraphVertex, VertexId};
    pub use crate::scheduler::{FrameLoop, FrameScheduler, ManualScheduler};
    pub use crate::simulator::components::forces::Forces;
    pub use crate::simulator::components::nodes::{StateStore, VertexMode, VertexState};
    pub use crate::simulator::ressources::events::SimulatorEvent;
    pub use crate::simulator::ressources::simulator_vars::{
        DeltaTime, Friction, SimulationParams, SpringStiffness, WorldSize,
    };
    pub use crate::simulator::{Simulator, SimulatorBuilder};
    pub use glam::Vec2;
}
