//! Bank deposits: overlap tracking and the trailing-edge debounced pool reset.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::time::Duration;

use crate::core::components::{BankZone, Money, Player, SpawnRng};
use crate::core::config::GameConfig;
use crate::core::system_order::PostPhysicsSet;
use crate::gameplay::spawning::spawn_money_batch;
use crate::level::GameAssets;

pub struct BankPlugin;

impl Plugin for BankPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BankContact>()
            .init_resource::<ResetDebounce>()
            .add_systems(
                Update,
                (track_bank_contact, bank_deposit)
                    .chain()
                    .in_set(PostPhysicsSet),
            );
    }
}

/// Number of live player/bank collider overlaps.
#[derive(Resource, Default)]
pub struct BankContact(pub u32);

impl BankContact {
    pub fn overlapping(&self) -> bool {
        self.0 > 0
    }
}

/// Trailing-edge debounce state: at most one pending reset; every new
/// trigger supersedes it with a full window. The reset fires only once the
/// window elapses without a retrigger.
#[derive(Resource, Default)]
pub struct ResetDebounce {
    pending: Option<Timer>,
}

impl ResetDebounce {
    pub fn trigger(&mut self, window: Duration) {
        self.pending = Some(Timer::new(window, TimerMode::Once));
    }

    /// Advances the pending timer; returns true exactly once, when it expires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = &mut self.pending else {
            return false;
        };
        timer.tick(delta);
        if timer.finished() {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

pub fn track_bank_contact(
    mut collisions: EventReader<CollisionEvent>,
    banks: Query<(), With<BankZone>>,
    players: Query<(), With<Player>>,
    mut contact: ResMut<BankContact>,
) {
    let is_pair = |a: Entity, b: Entity| {
        (banks.contains(a) && players.contains(b)) || (banks.contains(b) && players.contains(a))
    };
    for ev in collisions.read() {
        match *ev {
            CollisionEvent::Started(a, b, _) if is_pair(a, b) => contact.0 += 1,
            CollisionEvent::Stopped(a, b, _) if is_pair(a, b) => {
                contact.0 = contact.0.saturating_sub(1)
            }
            _ => {}
        }
    }
}

/// While the player overlaps the bank the pending reset is re-armed every
/// frame; it fires one debounce window after the overlap ends, replacing the
/// whole pool with a fresh batch.
pub fn bank_deposit(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    contact: Res<BankContact>,
    mut debounce: ResMut<ResetDebounce>,
    mut commands: Commands,
    money: Query<Entity, With<Money>>,
    assets: Option<Res<GameAssets>>,
    mut rng: ResMut<SpawnRng>,
) {
    if contact.overlapping() {
        debounce.trigger(Duration::from_secs_f32(cfg.bank.reset_debounce.max(0.0)));
        return;
    }
    if !debounce.tick(time.delta()) {
        return;
    }
    let discarded = money.iter().count();
    for entity in &money {
        commands.entity(entity).despawn();
    }
    let Some(assets) = assets else { return };
    let spawned = spawn_money_batch(&mut commands, &assets, &cfg, &mut rng.0);
    info!("bank deposit: discarded {discarded} money, spawned {spawned}");
}
