//! Cursor-key player control and grounded-state bookkeeping.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{FootSensor, Grounded, Platform, Player};
use crate::core::config::GameConfig;
use crate::core::system_order::{PostPhysicsSet, PrePhysicsSet};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, player_movement.in_set(PrePhysicsSet))
            .add_systems(Update, update_grounded.in_set(PostPhysicsSet));
    }
}

/// Left wins over right
/// (if/else-if ordering), releasing both zeroes horizontal speed, and the
/// jump impulse re-applies every frame the key is held on the ground (no
/// edge detection).
pub fn player_movement(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut players: Query<(&mut Velocity, &Grounded), With<Player>>,
) {
    let Ok((mut vel, grounded)) = players.single_mut() else {
        return;
    };

    if keys.pressed(KeyCode::ArrowLeft) {
        vel.linvel.x = -cfg.player.travel_speed;
    } else if keys.pressed(KeyCode::ArrowRight) {
        vel.linvel.x = cfg.player.travel_speed;
    } else {
        vel.linvel.x = 0.0;
    }

    if keys.pressed(KeyCode::Space) && grounded.on_ground() {
        vel.linvel.y = cfg.player.jump_speed;
    }
}

/// Maintains the player's contact counter from foot-sensor overlaps with
/// world geometry.
pub fn update_grounded(
    mut collisions: EventReader<CollisionEvent>,
    feet: Query<(), With<FootSensor>>,
    platforms: Query<(), With<Platform>>,
    mut players: Query<&mut Grounded, With<Player>>,
) {
    let Ok(mut grounded) = players.single_mut() else {
        return;
    };
    let is_pair = |a: Entity, b: Entity| {
        (feet.contains(a) && platforms.contains(b)) || (feet.contains(b) && platforms.contains(a))
    };
    for ev in collisions.read() {
        match *ev {
            CollisionEvent::Started(a, b, _) if is_pair(a, b) => grounded.contacts += 1,
            CollisionEvent::Stopped(a, b, _) if is_pair(a, b) => {
                grounded.contacts = grounded.contacts.saturating_sub(1)
            }
            _ => {}
        }
    }
}
