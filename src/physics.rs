use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

/// Collision group layout.
///
/// Player and money both rest on world geometry but must pass through each
/// other (overlap without physical response); their interaction is
/// observed through the sensor group instead.
pub const GROUP_WORLD: Group = Group::GROUP_1;
pub const GROUP_PLAYER: Group = Group::GROUP_2;
pub const GROUP_MONEY: Group = Group::GROUP_3;
pub const GROUP_SENSOR: Group = Group::GROUP_4;

pub fn world_groups() -> CollisionGroups {
    CollisionGroups::new(
        GROUP_WORLD,
        GROUP_PLAYER | GROUP_MONEY | GROUP_SENSOR,
    )
}

pub fn player_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_PLAYER, GROUP_WORLD | GROUP_SENSOR)
}

pub fn money_groups() -> CollisionGroups {
    CollisionGroups::new(GROUP_MONEY, GROUP_WORLD | GROUP_SENSOR)
}

pub fn sensor_groups(filter: Group) -> CollisionGroups {
    CollisionGroups::new(GROUP_SENSOR, filter)
}

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0))
            .add_systems(Startup, configure_gravity);

        #[cfg(feature = "debug")]
        app.add_plugins(RapierDebugRenderPlugin::default());
    }
}

fn configure_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    for mut cfg in &mut rapier_cfg {
        cfg.gravity = Vect::new(0.0, game_cfg.gravity.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_and_money_do_not_collide_physically() {
        let p = player_groups();
        let m = money_groups();
        // A pair interacts only when each membership passes the other's filter.
        assert!(!(p.filters.intersects(m.memberships) && m.filters.intersects(p.memberships)));
    }

    #[test]
    fn sensors_see_their_targets() {
        let pickup = sensor_groups(GROUP_MONEY);
        let m = money_groups();
        assert!(pickup.filters.intersects(m.memberships));
        assert!(m.filters.intersects(pickup.memberships));

        let foot = sensor_groups(GROUP_WORLD);
        let w = world_groups();
        assert!(foot.filters.intersects(w.memberships));
        assert!(w.filters.intersects(foot.memberships));
    }
}
