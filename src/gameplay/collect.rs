//! Player/money overlap handling.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Collected, Money, PickupSensor};
use crate::core::system_order::PostPhysicsSet;

pub struct CollectionPlugin;

impl Plugin for CollectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, collect_money.in_set(PostPhysicsSet));
    }
}

/// Deactivates a money entity the frame its collider starts intersecting the
/// pickup sensor. Only that entity is touched; it stays in the world (hidden,
/// collision and body disabled) until the next bank reset despawns the pool.
pub fn collect_money(
    mut collisions: EventReader<CollisionEvent>,
    pickups: Query<(), With<PickupSensor>>,
    money: Query<(), (With<Money>, Without<Collected>)>,
    mut commands: Commands,
) {
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = ev else {
            continue;
        };
        let hit = if pickups.contains(*a) {
            *b
        } else if pickups.contains(*b) {
            *a
        } else {
            continue;
        };
        if money.contains(hit) {
            commands.entity(hit).insert((
                Collected,
                ColliderDisabled,
                RigidBodyDisabled,
                Visibility::Hidden,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::{App, MinimalPlugins};
    use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

    fn collect_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<CollisionEvent>();
        app.add_systems(Update, collect_money);
        app
    }

    #[test]
    fn overlap_deactivates_exactly_that_money() {
        let mut app = collect_app();
        let sensor = app.world_mut().spawn(PickupSensor).id();
        let hit = app.world_mut().spawn((Money, Visibility::Visible)).id();
        let bystander = app.world_mut().spawn((Money, Visibility::Visible)).id();

        app.world_mut().send_event(CollisionEvent::Started(
            sensor,
            hit,
            CollisionEventFlags::SENSOR,
        ));
        app.update();

        let world = app.world();
        assert!(world.get::<Collected>(hit).is_some());
        assert!(world.get::<ColliderDisabled>(hit).is_some());
        assert!(world.get::<RigidBodyDisabled>(hit).is_some());
        assert_eq!(*world.get::<Visibility>(hit).unwrap(), Visibility::Hidden);
        assert!(world.get::<Collected>(bystander).is_none());
        assert_eq!(
            *world.get::<Visibility>(bystander).unwrap(),
            Visibility::Visible
        );
    }

    #[test]
    fn collection_is_idempotent() {
        let mut app = collect_app();
        let sensor = app.world_mut().spawn(PickupSensor).id();
        let hit = app.world_mut().spawn((Money, Visibility::Visible)).id();

        for _ in 0..3 {
            app.world_mut().send_event(CollisionEvent::Started(
                sensor,
                hit,
                CollisionEventFlags::SENSOR,
            ));
            app.update();
        }
        assert!(app.world().get::<Collected>(hit).is_some());
    }

    #[test]
    fn entity_order_in_the_pair_does_not_matter() {
        let mut app = collect_app();
        let sensor = app.world_mut().spawn(PickupSensor).id();
        let hit = app.world_mut().spawn((Money, Visibility::Visible)).id();

        app.world_mut().send_event(CollisionEvent::Started(
            hit,
            sensor,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
        assert!(app.world().get::<Collected>(hit).is_some());
    }

    #[test]
    fn unrelated_pairs_are_ignored() {
        let mut app = collect_app();
        let a = app.world_mut().spawn_empty().id();
        let money = app.world_mut().spawn((Money, Visibility::Visible)).id();

        app.world_mut().send_event(CollisionEvent::Started(
            a,
            money,
            CollisionEventFlags::SENSOR,
        ));
        app.update();
        assert!(app.world().get::<Collected>(money).is_none());
    }
}
