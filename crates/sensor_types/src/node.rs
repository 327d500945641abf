use serde::{Deserialize, Serialize};

#[cfg(feature = "ecs")]
use bevy::prelude::*;

/// Enabled/disabled state of a sensor endpoint.
///
/// A freshly constructed node starts disabled, and nothing in this crate
/// flips the flag afterwards. Embedding applications enable a sensor by
/// writing the field, typically from a system holding
/// `Query<&mut SensorNode>`.
///
/// When the `ecs` feature is enabled, this type also derives `Component`.
#[cfg_attr(feature = "ecs", derive(Component))]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SensorNode {
    /// Whether the sensor is currently enabled. New nodes start disabled.
    pub enabled: bool,
}

impl SensorNode {
    /// Returns true if this sensor is currently active.
    pub fn is_active(&self) -> bool {
        self.enabled
    }
}


#[cfg(all(test, feature = "ecs"))]
mod ecs_tests {
    use super::*;

    #[test]
    fn spawned_sensors_report_their_state() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        let idle = app.world_mut().spawn(SensorNode::default()).id();
        let live = app.world_mut().spawn(SensorNode { enabled: true }).id();

        app.update();

        let world = app.world();
        assert!(!world.get::<SensorNode>(idle).unwrap().is_active());
        assert!(world.get::<SensorNode>(live).unwrap().is_active());
    }
}
