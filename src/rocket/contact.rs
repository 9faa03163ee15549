//! What happens when the rocket touches something.
//!
//! Friendly surfaces (the launch pad) are harmless, fuel is collected, the
//! landing pad completes the level, and anything untagged is a crash that
//! returns the rocket to its [`LaunchPose`].

use super::state::{ContactOutcome, ContactTag, FlightEvent, LaunchPose, Rocket};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Map the other collider's tag to an outcome.
pub fn classify_contact(tag: Option<ContactTag>) -> ContactOutcome {
    match tag {
        Some(ContactTag::Friendly) => ContactOutcome::Friendly,
        Some(ContactTag::Fuel) => ContactOutcome::FuelCollected,
        Some(ContactTag::Finish) => ContactOutcome::LevelComplete,
        None => ContactOutcome::Crashed,
    }
}

/// Put a crashed rocket back on the pad with no momentum.
pub fn reset_to_launch(pose: &LaunchPose, transform: &mut Transform, velocity: &mut Velocity) {
    transform.translation = pose.translation;
    transform.rotation = pose.rotation;
    *velocity = Velocity::zero();
}

/// Classify every contact the rocket starts and act on it.
pub fn rocket_contact_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    mut flight_events: MessageWriter<FlightEvent>,
    tags: Query<&ContactTag>,
    mut rockets: Query<(Entity, &LaunchPose, &mut Transform, &mut Velocity), With<Rocket>>,
) {
    for event in collision_events.read() {
        let (e1, e2) = match event {
            CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
            CollisionEvent::Stopped(..) => continue,
        };

        let (rocket, other) = if rockets.contains(e1) {
            (e1, e2)
        } else if rockets.contains(e2) {
            (e2, e1)
        } else {
            continue;
        };

        let outcome = classify_contact(tags.get(other).ok().copied());
        match outcome {
            ContactOutcome::Friendly => debug!("[contact] friendly surface"),
            ContactOutcome::FuelCollected => {
                info!("[contact] fuel collected");
                commands.entity(other).try_despawn();
            }
            ContactOutcome::LevelComplete => info!("[contact] level complete"),
            ContactOutcome::Crashed => {
                info!("[contact] crashed into {other:?}; returning to launch pad");
                if let Ok((_, pose, mut transform, mut velocity)) = rockets.get_mut(rocket) {
                    reset_to_launch(pose, &mut transform, &mut velocity);
                }
            }
        }

        flight_events.write(FlightEvent {
            rocket,
            other,
            outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_contacts_crash() {
        assert_eq!(classify_contact(None), ContactOutcome::Crashed);
    }

    #[test]
    fn tags_map_to_outcomes() {
        assert_eq!(
            classify_contact(Some(ContactTag::Friendly)),
            ContactOutcome::Friendly
        );
        assert_eq!(
            classify_contact(Some(ContactTag::Fuel)),
            ContactOutcome::FuelCollected
        );
        assert_eq!(
            classify_contact(Some(ContactTag::Finish)),
            ContactOutcome::LevelComplete
        );
    }

    #[test]
    fn reset_restores_pose_and_stops_motion() {
        let pose = LaunchPose {
            translation: Vec3::new(-6.0, 0.8, 0.0),
            rotation: Quat::IDENTITY,
        };
        let mut transform = Transform::from_xyz(3.0, 4.0, 0.0)
            .with_rotation(Quat::from_rotation_z(1.0));
        let mut velocity = Velocity {
            linvel: Vec3::new(2.0, -5.0, 0.0),
            angvel: Vec3::new(0.0, 0.0, 3.0),
        };
        reset_to_launch(&pose, &mut transform, &mut velocity);
        assert_eq!(transform.translation, pose.translation);
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert_eq!(velocity.linvel, Vec3::ZERO);
        assert_eq!(velocity.angvel, Vec3::ZERO);
    }
}
