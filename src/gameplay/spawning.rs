//! Money spawning: batch generation, the spawn-viable coordinate sampler and
//! the "rain" trigger.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::components::{Grounded, Money, Player, RngSeed, SpawnRng};
use crate::core::config::{BankConfig, GameConfig, MoneyConfig};
use crate::core::coords::screen_to_world;
use crate::core::system_order::PrePhysicsSet;
use crate::level::GameAssets;
use crate::physics::money_groups;

/// Upper bound on rejection-sampling retries. The exclusion corner currently
/// sits outside the y band so the first candidate always passes, but a
/// widened range must not be able to loop forever.
const MAX_REJECTS: u32 = 64;

pub struct MoneySpawnPlugin;

impl Plugin for MoneySpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (init_spawn_rng, spawn_initial_batch)
                .chain()
                .after(crate::level::load_assets),
        )
        .add_systems(Update, rain_when_down_held.in_set(PrePhysicsSet));
    }
}

pub fn init_spawn_rng(mut commands: Commands, seed: Option<Res<RngSeed>>) {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.0),
        None => StdRng::from_entropy(),
    };
    commands.insert_resource(SpawnRng(rng));
}

fn spawn_initial_batch(
    mut commands: Commands,
    assets: Res<GameAssets>,
    cfg: Res<GameConfig>,
    mut rng: ResMut<SpawnRng>,
) {
    let n = spawn_money_batch(&mut commands, &assets, &cfg, &mut rng.0);
    info!("spawned initial money batch: {n}");
}

/// Holding down while grounded spawns a fresh batch every single frame.
/// Deliberately unthrottled and independent of the bank debounce; the pool
/// grows without bound for as long as the key is held.
fn rain_when_down_held(
    keys: Res<ButtonInput<KeyCode>>,
    players: Query<&Grounded, With<Player>>,
    mut commands: Commands,
    assets: Option<Res<GameAssets>>,
    cfg: Res<GameConfig>,
    mut rng: ResMut<SpawnRng>,
) {
    if !keys.pressed(KeyCode::ArrowDown) {
        return;
    }
    let Ok(grounded) = players.single() else {
        return;
    };
    if !grounded.on_ground() {
        return;
    }
    let Some(assets) = assets else { return };
    spawn_money_batch(&mut commands, &assets, &cfg, &mut rng.0);
}

/// Creates one batch of money entities. Batch size is uniform in
/// `[batch.min, batch.max)`; each entity gets a viable coordinate, a bounce
/// coefficient uniform in `[bounce.min, bounce.max)` and the configured
/// display scale. Returns the batch size.
pub fn spawn_money_batch(
    commands: &mut Commands,
    assets: &GameAssets,
    cfg: &GameConfig,
    rng: &mut StdRng,
) -> u32 {
    let amount = rng.gen_range(cfg.money.batch.min..cfg.money.batch.max);
    for _ in 0..amount {
        let pos = viable_coords(rng, &cfg.money, &cfg.bank);
        let bounce = rng.gen_range(cfg.money.bounce_range.min..cfg.money.bounce_range.max);
        commands.spawn((
            Money,
            Sprite {
                image: assets.money.clone(),
                ..default()
            },
            Transform::from_translation(screen_to_world(pos.x as f32, pos.y as f32).extend(0.5))
                .with_scale(Vec3::splat(cfg.money.scale)),
            RigidBody::Dynamic,
            Collider::ball(cfg.money.radius),
            // Collider radius is authoritative; don't let the sprite scale shrink it.
            ColliderScale::Absolute(Vect::ONE),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            Restitution::coefficient(bounce),
            money_groups(),
            Name::new("Money"),
        ));
    }
    amount
}

/// Draws spawn candidates until one lands outside the bank's exclusion
/// corner (x > exclusion_x AND y > exclusion_y is rejected). With the
/// current ranges the corner is unreachable, so the first candidate wins.
pub fn viable_coords(rng: &mut impl Rng, money: &MoneyConfig, bank: &BankConfig) -> IVec2 {
    let mut candidate = IVec2::ZERO;
    for _ in 0..MAX_REJECTS {
        candidate = IVec2::new(
            rng.gen_range(money.x_range.min..money.x_range.max),
            rng.gen_range(money.y_range.min..money.y_range.max),
        );
        if !(candidate.x > bank.exclusion_x && candidate.y > bank.exclusion_y) {
            return candidate;
        }
    }
    candidate
}
