//! Per-vertex data the systems read and produce.

pub mod forces;
pub mod nodes;
