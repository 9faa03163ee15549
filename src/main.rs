use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;

use rocket_boost::config::{self, GameConfig};
use rocket_boost::containment::ContainmentPlugin;
use rocket_boost::graphics;
use rocket_boost::level;
use rocket_boost::motion::MotionPlugin;
use rocket_boost::rocket::RocketPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rocket Boost".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert GameConfig with compiled defaults; load_game_config will
        // overwrite it from assets/boost.toml (if present) in Startup.
        .insert_resource(GameConfig::default())
        // Rapier steps inside the fixed schedule so the regulator can run right
        // after writeback with a constant step duration.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
        .add_plugins((ContainmentPlugin, RocketPlugin, MotionPlugin))
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the final values.
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
                graphics::setup_lighting,
                level::spawn_level.after(config::load_game_config),
            ),
        )
        .run();
}
