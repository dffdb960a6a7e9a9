use bevy::prelude::*;

use crate::app::session::SessionPlugin;
use crate::camera::CameraPlugin;
use crate::core::config::GameConfig;
use crate::core::system_order::{PostPhysicsSet, PrePhysicsSet};
use crate::gameplay::animation::AnimationPlugin;
use crate::gameplay::bank::BankPlugin;
use crate::gameplay::collect::CollectionPlugin;
use crate::gameplay::movement::MovementPlugin;
use crate::gameplay::spawning::MoneySpawnPlugin;
use crate::level::LevelPlugin;
use crate::physics::PhysicsSetupPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            PhysicsSetupPlugin,
            LevelPlugin,
            MoneySpawnPlugin,
            MovementPlugin,
            CollectionPlugin,
            BankPlugin,
            AnimationPlugin,
            SessionPlugin,
        ))
        .add_systems(Startup, report_config_warnings);

        #[cfg(feature = "debug")]
        app.add_systems(Update, crate::debug::log_entity_counts);
    }
}

fn report_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!("config: {warning}");
    }
}
