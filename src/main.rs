use bevy::prelude::*;

use money_rain::{GameConfig, GamePlugin};

fn main() {
    // Load configuration (fall back to defaults if missing or malformed)
    let (cfg, load_err) = GameConfig::load_or_default("assets/config/game.ron");
    if let Some(err) = &load_err {
        eprintln!("config: using defaults ({err})");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
}
