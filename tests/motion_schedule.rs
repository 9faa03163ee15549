//! Scripted motion runs in the fixed schedule alongside Rapier and writes
//! parent-relative `Transform`s.
//!
//! The schedules are run by hand with a manually advanced [`Time`], so the
//! test does not depend on wall-clock frame pacing.

use bevy::prelude::*;
use rocket_boost::motion::{Bobbing, MotionPlugin, Orbit};
use std::time::Duration;

fn motion_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>();
    app.add_plugins(MotionPlugin);
    app
}

fn spawn_orbiter(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Orbit::new(90.0, 2.0), Transform::from_xyz(1.0, 1.0, 0.0)))
        .id()
}

#[test]
fn orbit_advances_in_fixed_update() {
    let mut app = motion_app();
    let orbiter = spawn_orbiter(&mut app);

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs(1));
    app.world_mut().run_schedule(FixedUpdate);

    let p = app.world().get::<Transform>(orbiter).unwrap().translation;
    assert!((p - Vec3::new(1.0, 3.0, 0.0)).length() < 1e-4, "got {p:?}");
}

#[test]
fn orbit_does_not_move_in_update() {
    let mut app = motion_app();
    let orbiter = spawn_orbiter(&mut app);

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs(1));
    // Update may not even exist when nothing is registered there.
    let _ = app.world_mut().try_run_schedule(Update);

    let p = app.world().get::<Transform>(orbiter).unwrap().translation;
    assert_eq!(p, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn bobbing_offsets_are_local_to_the_parent() {
    let mut app = motion_app();
    let parent = app
        .world_mut()
        .spawn(Transform::from_xyz(50.0, 20.0, 0.0))
        .id();
    let child = app
        .world_mut()
        .spawn((
            Bobbing::new(Vec3::Y, 2.0, 0.25),
            Transform::from_xyz(0.0, 1.0, 0.0),
            ChildOf(parent),
        ))
        .id();

    // Quarter cycle at 0.25 Hz: the bob peaks.
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs(1));
    app.world_mut().run_schedule(FixedUpdate);

    let local = app.world().get::<Transform>(child).unwrap().translation;
    assert!((local - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-4, "got {local:?}");
    let parent_pos = app.world().get::<Transform>(parent).unwrap().translation;
    assert_eq!(parent_pos, Vec3::new(50.0, 20.0, 0.0));
}
