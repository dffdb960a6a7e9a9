use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Money Rain".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -2200.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal speed while left/right is held (px/s).
    pub travel_speed: f32,
    /// Upward speed applied every frame jump is held on the ground (px/s).
    pub jump_speed: f32,
    pub bounce: f32,
    pub scale: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            travel_speed: 500.0,
            jump_speed: 900.0,
            bounce: 0.1,
            scale: 0.25,
        }
    }
}

/// Half-open sampling range `[min, max)`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MoneyConfig {
    /// Batch size range, max exclusive: [10, 15) -> 10..=14 per batch.
    pub batch: SpawnRange<u32>,
    /// Spawn coordinate ranges in screen space, max exclusive.
    pub x_range: SpawnRange<i32>,
    pub y_range: SpawnRange<i32>,
    /// Vertical restitution range, max exclusive.
    pub bounce_range: SpawnRange<f32>,
    pub scale: f32,
    /// Collider radius in world units (the sprite is scaled independently).
    pub radius: f32,
}
impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            batch: SpawnRange { min: 10, max: 15 },
            x_range: SpawnRange { min: 20, max: 780 },
            y_range: SpawnRange { min: 0, max: 300 },
            bounce_range: SpawnRange { min: 0.4, max: 0.8 },
            scale: 0.2,
            radius: 12.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BankConfig {
    /// Bank marker position in screen space.
    pub x: f32,
    pub y: f32,
    /// Half extent of the overlap trigger collider.
    pub half_extent: f32,
    /// Spawn exclusion corner: candidates with x > exclusion_x AND
    /// y > exclusion_y are redrawn so money never lands on the bank sprite.
    pub exclusion_x: i32,
    pub exclusion_y: i32,
    /// Trailing-edge debounce window for the deposit reset, seconds.
    pub reset_debounce: f32,
}
impl Default for BankConfig {
    fn default() -> Self {
        Self {
            x: 700.0,
            y: 470.0,
            half_extent: 50.0,
            exclusion_x: 650,
            exclusion_y: 300,
            reset_debounce: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub player: PlayerConfig,
    pub money: MoneyConfig,
    pub bank: BankConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Validate the configuration returning a list of human-readable warning
    /// strings. These represent suspicious / potentially unintended values
    /// but are not hard errors. Call at startup and log each with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; money will float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); world is Y-up, use negative for downward",
                self.gravity.y
            ));
        }
        if self.player.travel_speed <= 0.0 {
            w.push("player.travel_speed must be > 0".into());
        }
        if self.player.jump_speed <= 0.0 {
            w.push("player.jump_speed must be > 0".into());
        }
        if !(0.0..=1.5).contains(&self.player.bounce) {
            w.push(format!(
                "player.bounce {} outside recommended 0..1.5",
                self.player.bounce
            ));
        }
        if self.player.scale <= 0.0 {
            w.push("player.scale must be > 0".into());
        }
        if self.money.batch.min >= self.money.batch.max {
            w.push(format!(
                "money.batch min ({}) must be < max ({}); max is exclusive",
                self.money.batch.min, self.money.batch.max
            ));
        }
        if self.money.batch.min == 0 {
            w.push("money.batch.min is 0; a reset may spawn nothing".into());
        }
        fn check_range_i32(w: &mut Vec<String>, label: &str, r: &SpawnRange<i32>) {
            if r.min >= r.max {
                w.push(format!(
                    "{label} min ({}) must be < max ({}); max is exclusive",
                    r.min, r.max
                ));
            }
        }
        check_range_i32(&mut w, "money.x_range", &self.money.x_range);
        check_range_i32(&mut w, "money.y_range", &self.money.y_range);
        if self.money.bounce_range.min >= self.money.bounce_range.max {
            w.push(format!(
                "money.bounce_range min ({}) must be < max ({}); max is exclusive",
                self.money.bounce_range.min, self.money.bounce_range.max
            ));
        }
        if self.money.bounce_range.min < 0.0 {
            w.push("money.bounce_range.min negative -> energy gain on bounce".into());
        }
        if self.money.scale <= 0.0 {
            w.push("money.scale must be > 0".into());
        }
        if self.money.radius <= 0.0 {
            w.push("money.radius must be > 0".into());
        }
        if self.bank.half_extent <= 0.0 {
            w.push("bank.half_extent must be > 0".into());
        }
        if self.bank.reset_debounce <= 0.0 {
            w.push(format!(
                "bank.reset_debounce {} must be > 0; deposits would reset every overlap frame",
                self.bank.reset_debounce
            ));
        }
        if self.money.y_range.max <= self.bank.exclusion_y {
            w.push(format!(
                "bank.exclusion_y ({}) at or above money.y_range.max ({}); the exclusion corner is unreachable",
                self.bank.exclusion_y, self.money.y_range.max
            ));
        }
        w
    }
}
