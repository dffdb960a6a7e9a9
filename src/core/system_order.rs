//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (manual velocity edits / spawn triggers before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysics (event consumption and lightweight state updates)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // velocity writes and spawn triggers before the physics step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsSet; // collision-event consumers after the physics step
