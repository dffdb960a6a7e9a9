pub mod animation;
pub mod bank;
pub mod collect;
pub mod movement;
pub mod spawning;
