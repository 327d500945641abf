//! Basic sensor status demo
//!
//! This demo runs a headless Bevy app that:
//! - Spawns a few named sensor endpoint entities
//! - Logs each sensor's active state once per tick
//! - Enables idle sensors once the warm-up period has passed
//!
//! Run with: cargo run -p basic_demo

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;

use sensor_types::SensorNode;

const WARM_UP_SECS: f32 = 3.0;

fn main() {
    let mut app = App::new();

    // Configure MinimalPlugins with a schedule runner that ticks once a second
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0))),
    );
    app.add_plugins(bevy::log::LogPlugin::default());

    app.add_systems(Startup, setup);
    app.add_systems(Update, (wake_idle_sensors, report_status));

    app.run();
}

fn setup(mut commands: Commands) {
    info!("Starting basic sensor status demo");

    // Spawn some sensor endpoints; nodes start disabled unless spawned live
    commands.spawn((Name::new("gps"), SensorNode::default()));
    commands.spawn((Name::new("orientation"), SensorNode::default()));
    commands.spawn((Name::new("camera"), SensorNode { enabled: true }));
}

fn wake_idle_sensors(time: Res<Time>, mut sensors: Query<(&Name, &mut SensorNode)>) {
    if time.elapsed_secs() < WARM_UP_SECS {
        return;
    }

    for (name, mut sensor) in sensors.iter_mut() {
        if !sensor.is_active() {
            sensor.enabled = true;
            info!("{} finished warming up", name.as_str());
        }
    }
}

fn report_status(sensors: Query<(&Name, &SensorNode)>) {
    for (name, sensor) in sensors.iter() {
        info!("{}: active={}", name.as_str(), sensor.is_active());
    }
}
