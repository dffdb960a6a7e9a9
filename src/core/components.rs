use bevy::prelude::*;
use rand::rngs::StdRng;

/// The controllable character.
#[derive(Component, Debug)]
pub struct Player;

/// One collectible. Lives from a spawn batch until it is banked away;
/// collection only deactivates it (see [`Collected`]).
#[derive(Component, Debug)]
pub struct Money;

/// Terminal state of a collected [`Money`]. Never removed; the whole entity
/// is despawned on the next bank reset instead.
#[derive(Component, Debug)]
pub struct Collected;

/// Static trigger region causing the pool reset.
#[derive(Component, Debug)]
pub struct BankZone;

/// Static walkable geometry (ground, platforms, world walls).
#[derive(Component, Debug)]
pub struct Platform;

/// Thin sensor under the player's feet; its world contacts drive [`Grounded`].
#[derive(Component, Debug)]
pub struct FootSensor;

/// Sensor matching the player's body used for money pickup overlap.
#[derive(Component, Debug)]
pub struct PickupSensor;

/// Contact counter maintained from foot-sensor collision events.
#[derive(Component, Debug, Default)]
pub struct Grounded {
    pub contacts: u32,
}

impl Grounded {
    pub fn on_ground(&self) -> bool {
        self.contacts > 0
    }
}

/// Deterministic RNG seed resource (set at startup / in tests for reproducible spawning).
#[derive(Resource, Debug, Copy, Clone)]
pub struct RngSeed(pub u64);

/// RNG driving all spawn randomness. Seeded from [`RngSeed`] when present,
/// otherwise from entropy.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);
