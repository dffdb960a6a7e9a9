// Ends the app after `window.autoClose` seconds (RON key `autoClose`).
// 0.0 (default) leaves the session running indefinitely; handy for headless
// smoke runs.

use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Deref, DerefMut)]
struct SessionTimer(Timer);

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_session_timer)
            .add_systems(Update, check_session_timer);
    }
}

fn arm_session_timer(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!("session will end after {secs} seconds");
        commands.insert_resource(SessionTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_session_timer(
    time: Res<Time>,
    mut timer: Option<ResMut<SessionTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.finished() {
            info!("session timer elapsed, exiting");
            ev_exit.write(AppExit::Success);
        }
    }
}
