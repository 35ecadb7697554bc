//! Errors raised while configuring a [`Simulator`](crate::simulator::Simulator).

use crate::graph::VertexId;

#[derive(Debug, thiserror::Error)]
pub enum SimulatorError {
    #[error("delta_time must be finite and greater than 0, got {0}")]
    InvalidDeltaTime(f32),
    #[error("friction must be finite and not negative, got {0}")]
    InvalidFriction(f32),
    #[error("spring stiffness must be finite and not negative, got {0}")]
    InvalidSpringStiffness(f32),
    #[error("world size must be finite and not negative, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },
    #[error("initial state of vertex {0} is not finite")]
    NonFiniteState(VertexId),
    #[cfg(feature = "winit")]
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
