//! Ressources used by the graph simulator.

use crate::error::{Result, SimulatorError};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viscous friction opposing each vertex's velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Friction(pub f32);

/// How strong the edge springs pull and push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStiffness(pub f32);

/// How much logical time a simulation step advances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaTime(pub f32);

/// The rectangle vertex positions are clamped into, spanning
/// `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl Friction {
    pub fn new(friction: f32) -> Result<Self> {
        if friction.is_finite() && friction >= 0.0 {
            Ok(Self(friction))
        } else {
            Err(SimulatorError::InvalidFriction(friction))
        }
    }
}

impl SpringStiffness {
    pub fn new(stiffness: f32) -> Result<Self> {
        if stiffness.is_finite() && stiffness >= 0.0 {
            Ok(Self(stiffness))
        } else {
            Err(SimulatorError::InvalidSpringStiffness(stiffness))
        }
    }
}

impl DeltaTime {
    pub fn new(delta_time: f32) -> Result<Self> {
        if delta_time.is_finite() && delta_time > 0.0 {
            Ok(Self(delta_time))
        } else {
            Err(SimulatorError::InvalidDeltaTime(delta_time))
        }
    }
}

impl WorldSize {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(SimulatorError::InvalidWorldSize { width, height })
        }
    }

    /// Clamp `position` into the world, component-wise.
    ///
    /// Written as `min(max(v, 0), bound)` so a degenerate world never panics.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.max(0.0).min(self.width),
            position.y.max(0.0).min(self.height),
        )
    }

    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

impl Default for Friction {
    fn default() -> Self {
        Self(10.0)
    }
}

impl Default for SpringStiffness {
    fn default() -> Self {
        Self(10.0)
    }
}

impl Default for DeltaTime {
    fn default() -> Self {
        Self(0.005)
    }
}

impl Default for WorldSize {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
        }
    }
}

/// Simulation-wide constants for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationParams {
    pub friction: Friction,
    pub spring_stiffness: SpringStiffness,
    pub delta_time: DeltaTime,
}
