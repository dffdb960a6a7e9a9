pub mod app;
pub mod camera;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod level;
pub mod physics;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{BankZone, Collected, Grounded, Money, Player, RngSeed, SpawnRng};
pub use crate::core::config::GameConfig;
pub use crate::level::GameAssets;
