use bevy::prelude::*;

/// Side-on camera looking at the middle of the level along −Z.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 8.0, 30.0).looking_at(Vec3::new(0.0, 8.0, 0.0), Vec3::Y),
    ));
    info!("[SETUP] Camera spawned");
}

/// Single shadow-casting key light above and in front of the level.
pub fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 20.0, 14.0).looking_at(Vec3::new(0.0, 8.0, 0.0), Vec3::Y),
    ));
}
