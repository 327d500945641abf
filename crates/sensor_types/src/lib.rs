//! Shared state types for sensor endpoint entities.
//!
//! This crate defines the component types describing the state of a sensor
//! endpoint. The types are plain serde-derived values that can be used
//! standalone or, with the `ecs` feature enabled, as Bevy components.

pub mod node;
pub use node::*;

// Explicitly export SensorNode for clarity
pub use node::SensorNode;
