#![cfg(feature = "debug")]

use bevy::prelude::*;

use crate::core::components::{Collected, Money, Player};

/// Once-a-second entity census, mostly useful when chasing pool growth from
/// the rain trigger.
pub fn log_entity_counts(
    time: Res<Time>,
    mut timer: Local<f32>,
    q_money: Query<Option<&Collected>, With<Money>>,
    q_player: Query<&Player>,
) {
    *timer += time.delta_secs();
    if *timer > 1.0 {
        *timer = 0.0;
        let total = q_money.iter().count();
        let collected = q_money.iter().filter(|c| c.is_some()).count();
        info!(
            "money={} collected={} players={}",
            total,
            collected,
            q_player.iter().count()
        );
    }
}
